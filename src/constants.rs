// UI constants
pub const APP_NAME: &str = "Solace";
pub const APP_TAGLINE: &str = "a quiet place to talk";

// Backend constants
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
pub const BACKEND_URL_ENV: &str = "SOLACE_BACKEND_URL";
pub const CHAT_PATH: &str = "/chat";
pub const HEALTH_PATH: &str = "/test";

// Canned transcript texts
pub const WELCOME_MESSAGE: &str =
    "Hello! I'm Solace, a mental wellbeing companion. How are you feeling today?";
pub const FALLBACK_REPLY: &str =
    "I'm sorry, I'm having trouble connecting to my server. Please try again in a moment.";
