pub mod cc;
pub mod nlc;
pub mod stt;

pub use cc::CcCommands;
pub use nlc::NlcCommands;
pub use stt::SttCommands;
