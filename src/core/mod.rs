pub mod clock;
pub mod constants;
pub mod formation;
pub mod gesture;
pub mod hand;
pub mod manual_override;
pub mod particles;

pub use clock::*;
pub use constants::*;
pub use formation::*;
pub use gesture::*;
pub use hand::*;
pub use manual_override::*;
pub use particles::*;
