use serde::{Deserialize, Serialize};


// The provider describes a side with a single `white` flag, so that's what goes on the wire.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, strum::Display, Serialize, Deserialize,
)]
#[serde(from = "bool", into = "bool")]
pub enum Force {
    White,
    Black,
}

impl Force {
    pub fn is_white(self) -> bool { self == Force::White }
}

impl From<bool> for Force {
    fn from(white: bool) -> Self { if white { Force::White } else { Force::Black } }
}

impl From<Force> for bool {
    fn from(force: Force) -> Self { force.is_white() }
}
