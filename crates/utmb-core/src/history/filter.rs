//! Case-insensitive substring search over saved builds.

use super::SavedBuild;

/// True if `needle` (already lowercased) occurs in the final URL, any UTM
/// value, or any custom key or value. An empty needle matches everything.
pub(super) fn matches(build: &SavedBuild, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let hit = |s: &str| s.to_lowercase().contains(needle);

    hit(&build.final_url)
        || build.utm_params.iter_emitted().any(|(_, v)| hit(v))
        || build
            .custom_params
            .iter()
            .any(|p| hit(&p.key) || hit(&p.value))
}
