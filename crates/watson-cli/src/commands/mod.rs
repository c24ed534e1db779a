pub mod cc;
pub mod dispatch;
pub mod nlc;
pub mod stt;
