use trailhead_catalog::Trip;

/// Free-text search: case-insensitive substring match over name,
/// destination, description, the difficulty label, and each tag.
/// No tokenization, no fuzzy matching. An empty or whitespace-only
/// query matches everything.
pub fn matches(trip: &Trip, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    trip.name.to_lowercase().contains(&needle)
        || trip.destination.to_lowercase().contains(&needle)
        || trip.description.to_lowercase().contains(&needle)
        || trip.difficulty.label().to_lowercase().contains(&needle)
        || trip.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
}
