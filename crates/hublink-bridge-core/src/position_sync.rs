use crate::domain::Rect;
use crate::ports::{ClockPort, LayoutPort, PortError, WidgetPort};

pub const DEFAULT_DEBOUNCE_MS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SyncOutcome {
    Applied(Rect),
    /// The singleton element is not on the page yet; retried next tick.
    WidgetMissing,
    PlaceholderMissing,
    Debounced,
}

/// Keeps the externally mounted widget visually co-located with the local
/// placeholder element. Purely geometric; independent of the connection
/// state machine.
pub struct PositionSync<W, L, K>
where
    W: WidgetPort,
    L: LayoutPort,
    K: ClockPort,
{
    widget: W,
    layout: L,
    clock: K,
    debounce_ms: u64,
    last_sync_ms: Option<u64>,
}

impl<W, L, K> PositionSync<W, L, K>
where
    W: WidgetPort,
    L: LayoutPort,
    K: ClockPort,
{
    pub fn new(widget: W, layout: L, clock: K, debounce_ms: u64) -> Self {
        Self {
            widget,
            layout,
            clock,
            debounce_ms,
            last_sync_ms: None,
        }
    }

    /// Immediate sync, no debounce gate.
    pub fn on_mount(&mut self) -> Result<SyncOutcome, PortError> {
        let now = self.clock.now_ms()?;
        self.sync_at(now)
    }

    /// Resize-cadence sync, collapsed to at most one layout write per
    /// debounce window.
    pub fn on_resize(&mut self) -> Result<SyncOutcome, PortError> {
        let now = self.clock.now_ms()?;
        if let Some(last) = self.last_sync_ms {
            if now.saturating_sub(last) < self.debounce_ms {
                return Ok(SyncOutcome::Debounced);
            }
        }
        self.sync_at(now)
    }

    /// Hides the widget. It is a page singleton owned elsewhere, so it is
    /// never removed.
    pub fn teardown(&mut self) -> Result<(), PortError> {
        if self.widget.locate()? {
            self.widget.set_visible(false)?;
        }
        Ok(())
    }

    fn sync_at(&mut self, now: u64) -> Result<SyncOutcome, PortError> {
        if !self.widget.locate()? {
            return Ok(SyncOutcome::WidgetMissing);
        }
        let Some(rect) = self.layout.placeholder_rect()? else {
            return Ok(SyncOutcome::PlaceholderMissing);
        };
        self.widget.set_position(rect)?;
        self.widget.set_visible(true)?;
        self.last_sync_ms = Some(now);
        Ok(SyncOutcome::Applied(rect))
    }
}
