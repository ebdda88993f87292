/// Health and lives of the player entity, owned by the host.
///
/// The session only reads these values to decide whether the player is defeated and to
/// feed the health bar, and forwards damage and healing to the mutators.
pub trait PlayerHealth {
    /// Whether the player entity is currently alive.
    fn is_alive(&self) -> bool;
    /// Lives left after the current one.
    fn remaining_lives(&self) -> i32;
    /// Current health points.
    fn current_health(&self) -> i32;
    /// Health points of a fresh life.
    fn max_health(&self) -> i32;
    /// Remove `amount` health points.
    fn take_damage(&mut self, amount: i32);
    /// Restore `amount` health points.
    fn add_health(&mut self, amount: i32);
}
