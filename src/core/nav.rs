//! Navigation bar presentation guard

/// Check whether the wizard navigation bar has anything worth rendering.
///
/// True iff the badge is present and non-empty, back is available, or the
/// continue control is shown. When false the host must suppress the bar
/// entirely; an empty bar still consumes layout space.
pub fn has_content(can_back: bool, show_continue: bool, badge: Option<&str>) -> bool {
    can_back || show_continue || badge.map_or(false, |b| !b.is_empty())
}
