use inj::callable::Callable;
use inj::injector::Injector;
use inj::instance::InstancePtr;
use inj::InjectorError;
use std::cell::Cell;

#[derive(Clone, Debug, PartialEq)]
struct Config {
    name: String,
}

#[test]
fn should_call_with_values_regardless_of_registration_order() {
    let mut first = Injector::new();
    first.register("foobar".to_string());
    first.register(42);

    let mut second = Injector::new();
    second.register(42);
    second.register("foobar".to_string());

    let function = |a: i32, b: String| format!("{a}:{b}");
    assert_eq!(first.call(function, &[]).unwrap(), "42:foobar");
    assert_eq!(second.call(function, &[]).unwrap(), "42:foobar");
}

#[test]
fn should_call_with_missing_type() {
    let injector = Injector::new();

    assert!(injector.call(|_: i32| {}, &[]).is_err());
}

#[test]
fn should_fail_call_without_function() {
    let injector = Injector::new();

    assert_eq!(
        injector.call_dynamic(Box::new(42), &[]).unwrap_err(),
        InjectorError::NotFunction
    );
}

#[test]
fn should_use_additional_scope() {
    let mut i1 = Injector::new();
    let mut i2 = Injector::new();

    i1.register(42);
    i2.register(43);

    assert!(i1.call(|the_answer: i32| the_answer == 42, &[&i2]).unwrap());
}

#[test]
fn should_inject_shared_instances() {
    let counter = InstancePtr::new(Cell::new(0));

    let mut injector = Injector::new();
    injector.register(counter.clone());

    for _ in 0..3 {
        injector
            .call(|c: InstancePtr<Cell<i32>>| c.set(c.get() + 1), &[])
            .unwrap();
    }

    assert_eq!(counter.get(), 3);
}

#[test]
fn should_hand_out_independent_clones() {
    let mut injector = Injector::new();
    injector.register(Config {
        name: "default".to_string(),
    });

    injector
        .call(
            |mut config: Config| config.name.push_str("-modified"),
            &[],
        )
        .unwrap();

    assert_eq!(
        injector.get::<Config>(),
        Some(Config {
            name: "default".to_string()
        })
    );
}

#[test]
fn should_invoke_boxed_callables() {
    let mut primary = Injector::new();
    primary.register(2u32);
    let mut fallback = Injector::new();
    fallback.register(vec!["a", "b"]);

    let functions: Vec<Box<dyn std::any::Any>> = vec![
        Box::new(Callable::new(|n: u32| n * 10)),
        Box::new(Callable::new(|items: Vec<&'static str>, n: u32| {
            items.len() as u32 + n
        })),
        Box::new("not a function"),
    ];

    let results: Vec<_> = functions
        .into_iter()
        .map(|function| primary.call_dynamic(function, &[&fallback]))
        .collect();

    assert_eq!(*results[0].as_ref().unwrap().downcast_ref::<u32>().unwrap(), 20);
    assert_eq!(*results[1].as_ref().unwrap().downcast_ref::<u32>().unwrap(), 4);
    assert_eq!(
        results[2].as_ref().unwrap_err(),
        &InjectorError::NotFunction
    );
}

#[test]
fn should_support_many_parameters() {
    let mut injector = Injector::new();
    injector.register(1u8);
    injector.register(2u16);
    injector.register(3u32);
    injector.register(4u64);
    injector.register(5i8);
    injector.register(6i16);
    injector.register(7i32);
    injector.register(8i64);
    injector.register(9usize);
    injector.register(10isize);
    injector.register(11u128);
    injector.register(12i128);

    let sum = injector
        .call(
            |a: u8,
             b: u16,
             c: u32,
             d: u64,
             e: i8,
             f: i16,
             g: i32,
             h: i64,
             i: usize,
             j: isize,
             k: u128,
             l: i128| {
                a as i128
                    + b as i128
                    + c as i128
                    + d as i128
                    + e as i128
                    + f as i128
                    + g as i128
                    + h as i128
                    + i as i128
                    + j as i128
                    + k as i128
                    + l
            },
            &[],
        )
        .unwrap();

    assert_eq!(sum, 78);
}
