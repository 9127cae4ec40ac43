/// Reasons a background cannot animate, or could not be wired up.
#[derive(thiserror::Error, Debug)]
pub enum BackgroundError {
    #[error("no browser window available")]
    NoWindow,

    #[error("canvas is not attached to a document")]
    Detached,

    #[error("2d canvas context unavailable")]
    NoContext,

    #[error(transparent)]
    Setup(#[from] anyhow::Error),
}

impl BackgroundError {
    /// Degraded-host conditions render the placeholder instead of failing.
    pub fn is_degraded_host(&self) -> bool {
        matches!(self, Self::NoWindow | Self::Detached | Self::NoContext)
    }
}

#[cfg(target_arch = "wasm32")]
impl From<BackgroundError> for wasm_bindgen::JsValue {
    fn from(e: BackgroundError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_conditions_degrade() {
        assert!(BackgroundError::NoWindow.is_degraded_host());
        assert!(BackgroundError::NoContext.is_degraded_host());
        let setup: BackgroundError = anyhow::anyhow!("listener rejected").into();
        assert!(!setup.is_degraded_host());
        assert_eq!(setup.to_string(), "listener rejected");
    }
}
