//! Translates raw GradleRIO output into operator-facing milestones
//!
//! GradleRIO prints its task names (`:deployJre`, `:deployMain`, ...) as it
//! works through the deploy graph. Each marker maps to a fixed
//! human-readable progress message; the table is a compatibility surface.

/// GradleRIO task markers and the milestone message each one triggers
const MILESTONES: &[(&str, &str)] = &[
    (":discoverRoborio", "Discovering roboRIO..."),
    (":deployJre", "Deploying JRE..."),
    (":deployRoborioCommands", "Deploying roboRIO commands..."),
    (":deployNativeLibs", "Deploying native libs..."),
    (":deployNativeZips", "Deploying native zips..."),
    (":deployMain", "Deploying code to roboRIO..."),
];

/// Scan one chunk of subprocess output for milestone markers.
///
/// Emits the message for every marker whose literal text occurs in the
/// chunk, ordered by first occurrence. Translation is stateless per chunk:
/// a marker straddling a chunk boundary is missed. The gradle runner feeds
/// whole lines, which keeps markers intact in practice.
pub fn translate(chunk: &str) -> Vec<&'static str> {
    let mut hits: Vec<(usize, &'static str)> = MILESTONES
        .iter()
        .filter_map(|(marker, message)| chunk.find(marker).map(|pos| (pos, *message)))
        .collect();

    hits.sort_by_key(|(pos, _)| *pos);
    hits.into_iter().map(|(_, message)| message).collect()
}
