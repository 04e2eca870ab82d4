use inj::injector::Injector;
use tracing_subscriber::EnvFilter;

// run with RUST_LOG=inj=trace to see how parameters are resolved
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // an injector is a map from types to values
    let mut injector = Injector::new();
    injector.register("foobar");
    injector.register(42);

    // registering another value of the same type replaces the previous one
    let replaced = injector.register(43);
    println!("replaced: {replaced}");

    // parameters are matched by their type, not by position or name
    let result = injector
        .call(|a: i32, b: &'static str| format!("{a} {b}"), &[])
        .expect("error calling function");

    // prints "43 foobar"
    println!("{result}");

    // missing types are reported along with the contents of every searched scope
    if let Err(error) = injector.call(|_: f64| {}, &[]) {
        println!("{error}");
    }
}
