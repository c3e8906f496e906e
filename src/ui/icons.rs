pub struct Icons;

impl Icons {
    pub const SEARCH: &str = "🔍";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
    pub const INFO: &str = "ℹ️";
    pub const RESUME: &str = "📄";
    pub const SAVE: &str = "💾";
    pub const DATABASE: &str = "🗄️";
    pub const BRIEFCASE: &str = "💼";
    pub const PIN: &str = "📍";
    pub const EMAIL: &str = "📧";
    pub const PHONE: &str = "📱";
    pub const STAR: &str = "⭐";
}
