/*
 * Interaction Module
 *
 * Everything the overlay does on top of the mesh: pointer and touch tracking,
 * the collapsible navigation menu, the hidden three-click "hack" game on the
 * navigation toggle and the headline flicker. None of it feeds back into the
 * simulation except the pointer position.
 *
 * State is exposed as marker flags whose names are the contract with the
 * overlay renderer: `nav-open`, `hack-alert`, `flicker` and `show`.
 */

use std::time::Duration;

use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::Rng;

use crate::params::{MeshParams, OverlayTimings};
use crate::schedule::{Scheduler, TimerHandle};
use crate::viewport::Viewport;

pub const HACK_MESSAGE: &str = "SYSTEM UNLOCKED: WELCOME, HACKER!";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Markers {
    // Shared by the menu and the toggle
    pub nav_open: bool,
    pub hack_alert: bool,
    pub flicker: bool,
    pub message_shown: bool,
}

impl Markers {
    pub const NAV_OPEN: &'static str = "nav-open";
    pub const HACK_ALERT: &'static str = "hack-alert";
    pub const FLICKER: &'static str = "flicker";
    pub const MESSAGE_SHOWN: &'static str = "show";

    /// Names of the markers currently set.
    pub fn active(&self) -> Vec<&'static str> {
        [
            (self.nav_open, Self::NAV_OPEN),
            (self.hack_alert, Self::HACK_ALERT),
            (self.flicker, Self::FLICKER),
            (self.message_shown, Self::MESSAGE_SHOWN),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayEvent {
    HackWindowElapsed,
    HackSuccessElapsed,
    AlertFade,
    FlickerStart,
    FlickerEnd,
    TouchClear,
}

/// Clicks reported by the overlay for a single frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlayClicks {
    pub toggle: bool,
    pub link: bool,
}

pub struct Interaction {
    pub markers: Markers,
    pub click_count: u32,
    hack_window: Option<TimerHandle>,
    scheduler: Scheduler<OverlayEvent>,
    timings: OverlayTimings,
    rng: StdRng,
}

impl Interaction {
    pub fn new(timings: OverlayTimings, rng: StdRng) -> Self {
        Self {
            markers: Markers::default(),
            click_count: 0,
            hack_window: None,
            scheduler: Scheduler::new(),
            timings,
            rng,
        }
    }

    // Kick off the headline flicker loop
    pub fn start(&mut self, now: Duration) {
        self.scheduler.schedule(now, self.timings.first_flicker, OverlayEvent::FlickerStart);
    }

    /// Mouse movement only steers the mesh on the desktop layout.
    pub fn mouse_moved(&mut self, viewport: &mut Viewport, position: Vec2, params: &MeshParams) -> bool {
        if params.is_mobile(viewport.width) {
            return false;
        }
        viewport.set_pointer(position);
        true
    }

    /// Touch movement only steers the mesh on the mobile layout, and only
    /// briefly: every sample schedules its own pointer clear.
    pub fn touch_moved(
        &mut self,
        now: Duration,
        viewport: &mut Viewport,
        position: Vec2,
        params: &MeshParams,
    ) -> bool {
        if !params.is_mobile(viewport.width) {
            return false;
        }
        viewport.set_pointer(position);
        self.scheduler.schedule(now, self.timings.touch_clear, OverlayEvent::TouchClear);
        true
    }

    /// A click on the navigation toggle. Drives both the mobile menu and the
    /// hack game; the menu check sees the alert state from before this click.
    pub fn toggle_clicked(&mut self, now: Duration, mobile: bool) {
        if mobile && !self.markers.hack_alert {
            self.markers.nav_open = !self.markers.nav_open;
        }

        self.click_count += 1;
        self.markers.hack_alert = true;
        log::debug!("toggle click {} of {}", self.click_count, self.timings.required_clicks);

        self.restart_hack_window(now);

        if self.click_count >= self.timings.required_clicks {
            if let Some(handle) = self.hack_window.take() {
                self.scheduler.cancel(handle);
            }
            self.click_count = 0;
            self.markers.message_shown = true;
            log::info!("{}", HACK_MESSAGE);

            self.scheduler
                .schedule(now, self.timings.success_hold, OverlayEvent::HackSuccessElapsed);
        } else {
            self.scheduler.schedule(now, self.timings.alert_fade, OverlayEvent::AlertFade);
        }
    }

    // Debounce: drop the pending window and open a new one
    fn restart_hack_window(&mut self, now: Duration) {
        if let Some(handle) = self.hack_window.take() {
            self.scheduler.cancel(handle);
        }
        let handle = self
            .scheduler
            .schedule(now, self.timings.hack_window, OverlayEvent::HackWindowElapsed);
        self.hack_window = Some(handle);
    }

    // Any menu link closes the menu, whatever the layout
    pub fn link_selected(&mut self) {
        self.markers.nav_open = false;
    }

    /// One frame of overlay work. Timers due by `now` fire before this
    /// frame's clicks are applied, so an expired click window or a faded
    /// alert is already cleared when the click is counted.
    pub fn step(
        &mut self,
        now: Duration,
        viewport: &mut Viewport,
        params: &MeshParams,
        clicks: OverlayClicks,
    ) {
        self.poll(now, viewport);

        if clicks.toggle {
            let mobile = params.is_mobile(viewport.width);
            self.toggle_clicked(now, mobile);
        }
        if clicks.link {
            self.link_selected();
        }
    }

    /// Fire every timer due by `now`.
    pub fn poll(&mut self, now: Duration, viewport: &mut Viewport) {
        for (deadline, event) in self.scheduler.poll(now) {
            self.handle(event, deadline, viewport);
        }
    }

    // `due` is the deadline the event was scheduled for, never later than the poll
    fn handle(&mut self, event: OverlayEvent, due: Duration, viewport: &mut Viewport) {
        log::debug!("overlay timer fired: {:?}", event);

        match event {
            OverlayEvent::HackWindowElapsed => {
                self.hack_window = None;
                if self.click_count < self.timings.required_clicks {
                    self.markers.hack_alert = false;
                }
                if self.click_count > 0 {
                    log::debug!("hack window elapsed after {} clicks", self.click_count);
                }
                self.click_count = 0;
            }
            OverlayEvent::HackSuccessElapsed => {
                self.markers.hack_alert = false;
                self.markers.message_shown = false;
            }
            OverlayEvent::AlertFade => {
                self.markers.hack_alert = false;
            }
            OverlayEvent::FlickerStart => {
                self.markers.flicker = true;
                self.scheduler.schedule(due, self.timings.flicker_hold, OverlayEvent::FlickerEnd);

                let next = self.next_flicker_delay();
                self.scheduler.schedule(due, next, OverlayEvent::FlickerStart);
            }
            OverlayEvent::FlickerEnd => {
                self.markers.flicker = false;
            }
            OverlayEvent::TouchClear => {
                viewport.clear_pointer();
            }
        }
    }

    fn next_flicker_delay(&mut self) -> Duration {
        let (low, high) = self.timings.flicker_interval_ms;
        Duration::from_millis(self.rng.gen_range(low..high))
    }

    pub fn hack_window_pending(&self) -> bool {
        self.hack_window
            .map_or(false, |handle| self.scheduler.is_pending(handle))
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.len()
    }
}
