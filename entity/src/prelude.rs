pub use super::character::Entity as Character;
pub use super::favorite::Entity as Favorite;
pub use super::planet::Entity as Planet;
pub use super::species::Entity as Species;
pub use super::user::Entity as User;
pub use super::vehicle::Entity as Vehicle;
