//! Database model type aliases.
//!
//! Short names for the sea-orm entity models used throughout the server, so signatures do
//! not need to spell out the `entity` crate paths.

/// Type alias for character database model.
///
/// # Fields (from `entity::character::Model`)
/// - `id` - Primary key
/// - `name` - Character name
/// - `description` - Up to 500 characters
/// - `planet_id` - Foreign key to the homeworld planet
/// - `specie_id` - Foreign key to the character's species
pub type CharacterModel = entity::character::Model;

/// Type alias for vehicle database model.
///
/// # Fields (from `entity::vehicle::Model`)
/// - `id` - Primary key
/// - `name` - Vehicle name
/// - `vehicle_type` - Stored in the `type` column
/// - `max_speed` - Free-form speed text
/// - `charac_id` - Foreign key to the owning character
pub type VehicleModel = entity::vehicle::Model;

/// Type alias for planet database model.
pub type PlanetModel = entity::planet::Model;

/// Type alias for species database model.
///
/// `species_type` is stored in the `type` column, `planet_id` references the native planet.
pub type SpeciesModel = entity::species::Model;

/// Type alias for user database model.
///
/// Carries the stored password, which must never leave the server.
pub type UserModel = entity::user::Model;

/// Type alias for favorite database model.
///
/// # Fields (from `entity::favorite::Model`)
/// - `id` - Primary key
/// - `user_id` - Foreign key to the owning user
/// - `character_id` - Optional foreign key to a favorited character
/// - `planet_id` - Optional foreign key to a favorited planet
pub type FavoriteModel = entity::favorite::Model;
