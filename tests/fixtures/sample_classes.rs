pub struct ClassWithMethods;

impl ClassWithMethods {
    pub fn public_method(&self) {
        println!("Hello from an instance method!");
    }

    pub fn public_static_method() {
        println!("Hello from a static method!");
    }
}

pub struct DateTime;

impl DateTime {
    pub fn createFromFormat(format: &str, value: &str) -> Option<Self> {
        None
    }

    pub fn format(&self, format: &str) -> String {
        String::new()
    }
}

pub struct Greeter;

impl Greeter {
    pub fn call(&self) -> &'static str {
        "Hello, world!"
    }
}

pub fn greet() -> &'static str {
    Greeter.call()
}

pub trait Describe {
    fn describe(&self) -> String {
        String::from("sample")
    }
}

impl Describe for ClassWithMethods {}
