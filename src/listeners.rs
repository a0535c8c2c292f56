use ratatui::layout::Rect;
use tracing::debug;

/// Something that closes (or commits) when the user clicks elsewhere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutsideTarget {
    EditField,
    FilterDropdown,
    SearchOverlay,
}

/// Handle for a registered listener
///
/// Not `Clone`: releasing consumes it, so a listener is released exactly once.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a subscription must be released with unsubscribe"]
pub struct Subscription {
    id: u64,
    target: OutsideTarget,
}

#[derive(Debug)]
struct Listener {
    id: u64,
    target: OutsideTarget,
    /// Screen area of the target, recorded at render time
    area: Option<Rect>,
}

/// Registry of "click outside" listeners
#[derive(Debug, Default)]
pub struct OutsideClickListeners {
    next_id: u64,
    listeners: Vec<Listener>,
}

impl OutsideClickListeners {
    pub fn subscribe(&mut self, target: OutsideTarget) -> Subscription {
        self.next_id += 1;
        let id = self.next_id;
        self.listeners.push(Listener {
            id,
            target,
            area: None,
        });
        Subscription { id, target }
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) {
        debug!(listener = ?subscription.target, "released outside-click listener");
        self.listeners.retain(|l| l.id != subscription.id);
    }

    /// Release everything (teardown)
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[cfg(test)]
    pub fn is_subscribed(&self, target: OutsideTarget) -> bool {
        self.listeners.iter().any(|l| l.target == target)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Record where `target` was drawn; ignored when nobody listens for it
    pub fn set_area(&mut self, target: OutsideTarget, area: Rect) {
        for listener in self.listeners.iter_mut().filter(|l| l.target == target) {
            listener.area = Some(area);
        }
    }

    /// `target` is scrolled out of view: every click lands outside it
    pub fn mark_offscreen(&mut self, target: OutsideTarget) {
        self.set_area(target, Rect::default());
    }

    /// Targets that a mouse-down at (column, row) lands outside of
    ///
    /// Targets that were never drawn don't fire.
    pub fn outside_of(&self, column: u16, row: u16) -> Vec<OutsideTarget> {
        self.listeners
            .iter()
            .filter_map(|l| {
                let area = l.area?;
                if contains(area, column, row) {
                    None
                } else {
                    Some(l.target)
                }
            })
            .collect()
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_and_unsubscribe() {
        let mut listeners = OutsideClickListeners::default();
        let sub = listeners.subscribe(OutsideTarget::FilterDropdown);
        assert!(listeners.is_subscribed(OutsideTarget::FilterDropdown));
        assert_eq!(listeners.len(), 1);

        listeners.unsubscribe(sub);
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_unsubscribe_only_releases_its_own_listener() {
        let mut listeners = OutsideClickListeners::default();
        let first = listeners.subscribe(OutsideTarget::SearchOverlay);
        let second = listeners.subscribe(OutsideTarget::EditField);
        listeners.unsubscribe(first);
        assert!(!listeners.is_subscribed(OutsideTarget::SearchOverlay));
        assert!(listeners.is_subscribed(OutsideTarget::EditField));
        listeners.unsubscribe(second);
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_outside_of() {
        let mut listeners = OutsideClickListeners::default();
        let _sub = listeners.subscribe(OutsideTarget::FilterDropdown);

        // Not drawn yet: never fires
        assert!(listeners.outside_of(0, 0).is_empty());

        listeners.set_area(OutsideTarget::FilterDropdown, Rect::new(10, 5, 20, 4));
        assert!(listeners.outside_of(10, 5).is_empty());
        assert!(listeners.outside_of(29, 8).is_empty());
        assert_eq!(listeners.outside_of(30, 8), vec![OutsideTarget::FilterDropdown]);
        assert_eq!(listeners.outside_of(10, 9), vec![OutsideTarget::FilterDropdown]);
    }

    #[test]
    fn test_offscreen_target_fires_everywhere() {
        let mut listeners = OutsideClickListeners::default();
        let _sub = listeners.subscribe(OutsideTarget::EditField);
        listeners.set_area(OutsideTarget::EditField, Rect::new(1, 6, 38, 1));
        assert!(listeners.outside_of(5, 6).is_empty());

        listeners.mark_offscreen(OutsideTarget::EditField);
        assert_eq!(listeners.outside_of(5, 6), vec![OutsideTarget::EditField]);
        assert_eq!(listeners.outside_of(0, 0), vec![OutsideTarget::EditField]);
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut listeners = OutsideClickListeners::default();
        let _a = listeners.subscribe(OutsideTarget::EditField);
        let _b = listeners.subscribe(OutsideTarget::SearchOverlay);
        listeners.clear();
        assert!(listeners.is_empty());
    }
}
