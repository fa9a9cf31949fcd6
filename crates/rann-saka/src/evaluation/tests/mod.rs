mod adjust;
mod common;
mod score;
mod session;
