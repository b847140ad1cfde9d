use serde::Serialize;

/// Rendering options. Serialized verbatim into the header of every module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeScriptOptions {
    /// Accept typed arrays on numeric array fields, e.g. `number[] | Uint32Array`.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub include_typed_arrays: bool,
}

impl TypeScriptOptions {
    pub fn with_typed_arrays(mut self, enabled: bool) -> Self {
        self.include_typed_arrays = enabled;
        self
    }
}
