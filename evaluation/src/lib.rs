mod piece_values;
mod psqt;
mod score;

pub use piece_values::PieceValues;
pub use psqt::{relative_square_index, Psqt};
pub use score::{Score, S};
