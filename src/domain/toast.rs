// Toast - Kinds of transient feedback messages

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Error => "error",
        }
    }

    /// Class list of the toast element while the message is visible.
    pub fn visible_class(&self) -> String {
        format!("toast show {}", self.as_str())
    }
}

pub const HIDDEN_TOAST_CLASS: &str = "toast";
