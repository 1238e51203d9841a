// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! attrs {
    // Ordered attribute block shorthand!
    // attrs! { "id" => abbr, "label" => name } keeps keys in the written order.
    ($($key:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut attrs = $crate::model::Attrs::new();
        $(
            attrs.push($key, $value);
        )*
        attrs
    }};
}
