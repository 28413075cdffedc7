//! In-memory model factories.

/// Create a planet model with test values.
pub fn mock_planet(id: i32) -> entity::planet::Model {
    entity::planet::Model {
        id,
        name: "Tatooine".to_string(),
        description: "A harsh desert world orbiting twin suns".to_string(),
    }
}

/// Create a species model native to `planet_id`.
pub fn mock_species(id: i32, planet_id: i32) -> entity::species::Model {
    entity::species::Model {
        id,
        species_type: "Human".to_string(),
        planet_id,
    }
}

/// Create a character model with test values.
pub fn mock_character(id: i32, planet_id: i32, specie_id: i32) -> entity::character::Model {
    entity::character::Model {
        id,
        name: "Luke Skywalker".to_string(),
        description: "Jedi Knight".to_string(),
        planet_id,
        specie_id,
    }
}

/// Create a vehicle model owned by `charac_id`.
pub fn mock_vehicle(id: i32, charac_id: i32) -> entity::vehicle::Model {
    entity::vehicle::Model {
        id,
        name: "X-34 landspeeder".to_string(),
        vehicle_type: "repulsorcraft".to_string(),
        max_speed: "250".to_string(),
        charac_id,
    }
}

/// Create a user model with test values.
pub fn mock_user(id: i32) -> entity::user::Model {
    entity::user::Model {
        id,
        username: "luke".to_string(),
        email: "luke@holocron.test".to_string(),
        password: "usetheforce".to_string(),
    }
}

/// Create a favorite model for `user_id` pointing at the given targets.
pub fn mock_favorite(
    id: i32,
    user_id: i32,
    character_id: Option<i32>,
    planet_id: Option<i32>,
) -> entity::favorite::Model {
    entity::favorite::Model {
        id,
        user_id,
        character_id,
        planet_id,
    }
}
