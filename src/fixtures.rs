#[cfg(test)]
pub mod test {
    use thiserror::Error;

    use crate::error::HookError;
    use crate::page::{Notification, Notifier};
    use crate::value::{CodecError, TextCodec};

    // -- Custom codec -----------------------------------------------------------

    #[derive(Debug, Error, PartialEq)]
    #[error("unmarshal error")]
    pub struct UnmarshalError;

    #[derive(Debug, Error)]
    #[error("marshal error")]
    pub struct MarshalError;

    /// Text wrapper with its own codec. Encoding `"marshal_error"` and
    /// decoding `"error"` fail.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct CustomValue {
        pub value: String,
    }

    impl CustomValue {
        pub fn new(value: &str) -> Self {
            Self {
                value: value.to_string(),
            }
        }
    }

    impl TextCodec for CustomValue {
        fn encode_text(&self) -> Result<String, CodecError> {
            if self.value == "marshal_error" {
                return Err(MarshalError.into());
            }
            Ok(self.value.clone())
        }

        fn decode_text(&mut self, text: &str) -> Result<(), CodecError> {
            if text == "error" {
                return Err(UnmarshalError.into());
            }
            self.value = text.to_string();
            Ok(())
        }
    }

    crate::custom_codec!(CustomValue);

    // -- Root with three sections -------------------------------------------------

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Section1 {
        pub string_field: String,
        pub bool_field: bool,
        pub int_field: i32,
        pub uint_field: u64,
        pub float_field: f64,
        pub custom_field: CustomValue,
        pub ignored_field: String,
        pub version: String,
        pub tags: Vec<String>,
        pub hidden: i32,
    }

    crate::section! {
        Section1 {
            string_field => "string_field,String Field,text,icon,status,help",
            bool_field => "BoolField",
            int_field => "IntField",
            uint_field,
            float_field,
            custom_field,
            ignored_field => "-",
            version (readonly),
            tags,
        }
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Section2 {
        pub int8_field: i8,
        pub int16_field: i16,
        pub int32_field: i32,
        pub int64_field: i64,
        pub isize_field: isize,
        pub uint8_field: u8,
        pub uint16_field: u16,
        pub uint32_field: u32,
        pub usize_field: usize,
        pub float32_field: f32,
        pub float64_field: f64,
    }

    crate::section! {
        Section2 {
            int8_field,
            int16_field,
            int32_field,
            int64_field,
            isize_field,
            uint8_field,
            uint16_field,
            uint32_field,
            usize_field,
            float32_field,
            float64_field,
        }
    }

    /// Section whose hooks record their calls in members the registry does
    /// not list.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Tracked {
        pub label: String,
        pub count: i32,
        pub initialized: u32,
        pub updates: u32,
        pub label_at_update: String,
        pub sibling_at_update: String,
        pub fail_update: bool,
    }

    crate::section! {
        Tracked { label, count }
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct TestConfig {
        pub section1: Section1,
        pub section2: Section2,
        pub tracked: Tracked,
        pub hidden: i32,
    }

    impl TestConfig {
        /// Seeds `tracked.count` from `section2`.
        fn tracked_initialize(&mut self, notifier: &mut dyn Notifier) -> Result<(), HookError> {
            self.tracked.initialized += 1;
            self.tracked.count = self.section2.int64_field as i32;
            notifier.notify(Notification::success("tracked initialized"));
            Ok(())
        }

        /// Reads `section1` and copies `tracked.count` into `section2`.
        fn tracked_updated(&mut self, notifier: &mut dyn Notifier) -> Result<(), HookError> {
            self.tracked.updates += 1;
            self.tracked.label_at_update = self.tracked.label.clone();
            self.tracked.sibling_at_update = self.section1.string_field.clone();
            if self.tracked.fail_update {
                return Err("update error".into());
            }
            self.section2.int32_field = self.tracked.count;
            notifier.notify(Notification::success("tracked updated"));
            Ok(())
        }
    }

    crate::settings! {
        TestConfig {
            section1,
            section2,
            tracked (
                initialize = TestConfig::tracked_initialize,
                updated = TestConfig::tracked_updated,
            ),
        }
    }

    // -- Small sections for single-behavior tests ------------------------------

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Account {
        pub name: String,
        pub active: bool,
    }

    crate::section! {
        Account {
            name => "user_name",
            active => "Active",
        }
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Retry {
        pub retries: u32,
    }

    crate::section! {
        Retry { retries => "Retries" }
    }

    // -- Initialization failure ---------------------------------------------------

    /// Section whose initializer counts its calls and fails when asked to.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Counter {
        pub value: i32,
        pub initialized: u32,
        pub fail: bool,
    }

    impl Counter {
        fn run(&mut self) -> Result<(), HookError> {
            self.initialized += 1;
            if self.fail {
                return Err("init error".into());
            }
            Ok(())
        }
    }

    crate::section! {
        Counter { value }
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct InitFailConfig {
        pub first: Counter,
        pub second: Counter,
        pub third: Counter,
    }

    impl Default for InitFailConfig {
        fn default() -> Self {
            Self {
                first: Counter::default(),
                second: Counter {
                    fail: true,
                    ..Counter::default()
                },
                third: Counter::default(),
            }
        }
    }

    impl InitFailConfig {
        fn init_first(&mut self, _notifier: &mut dyn Notifier) -> Result<(), HookError> {
            self.first.run()
        }

        fn init_second(&mut self, _notifier: &mut dyn Notifier) -> Result<(), HookError> {
            self.second.run()
        }

        fn init_third(&mut self, _notifier: &mut dyn Notifier) -> Result<(), HookError> {
            self.third.run()
        }

        fn third_updated(&mut self, _notifier: &mut dyn Notifier) -> Result<(), HookError> {
            Ok(())
        }
    }

    crate::settings! {
        InitFailConfig {
            first (initialize = InitFailConfig::init_first),
            second (initialize = InitFailConfig::init_second),
            third (updated = InitFailConfig::third_updated, initialize = InitFailConfig::init_third),
        }
    }
}
