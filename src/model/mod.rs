mod envelope;
mod feed;
mod match_detail;
mod match_record;
mod sample;

pub use envelope::*;
pub use feed::*;
pub use match_detail::*;
pub use match_record::*;
pub use sample::*;
