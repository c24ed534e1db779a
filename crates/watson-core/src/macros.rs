//! Helpers for the per-operation option structs.

/// Implement `with_header` for option structs carrying a
/// `headers: HashMap<String, String>` field.
///
/// ```ignore
/// watson_core::impl_with_header!(ListModelsOptions, GetModelOptions);
/// ```
#[macro_export]
macro_rules! impl_with_header {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $ty {
                /// Add a request header for this call only. Overrides any
                /// default header of the same name.
                #[must_use]
                pub fn with_header(
                    mut self,
                    name: impl Into<String>,
                    value: impl Into<String>,
                ) -> Self {
                    self.headers.insert(name.into(), value.into());
                    self
                }
            }
        )+
    };
}
