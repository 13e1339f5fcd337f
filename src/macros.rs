#[macro_export]
macro_rules! json {
    // Handle null
    (null) => {
        $crate::JsonValue::Null
    };

    // Handle true
    (true) => {
        $crate::JsonValue::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::JsonValue::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::JsonValue::Array($crate::JsonArray::new())
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::JsonValue::Array($crate::JsonArray::from(vec![$($crate::json!($elem)),*]))
    };

    // Handle empty object
    ({}) => {
        $crate::JsonValue::Object($crate::JsonMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::JsonMap::new();
        $(
            object.insert($key.to_string(), $crate::json!($value));
        )*
        $crate::JsonValue::Object(object)
    }};

    // Anything else goes through the From conversions
    ($other:expr) => {
        $crate::JsonValue::from($other)
    };
}
