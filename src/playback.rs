//! Replay cursor over a finished trace.
//!
//! The front end drives this from a timer: `nextStep` every `speed`
//! milliseconds, `previousStep` to rewind. The trace itself is never
//! modified, so stepping in either direction is always safe.

use wasm_bindgen::prelude::*;

use crate::trace::{trace_from_json, TraceEvent};

/// Replay interval used until the caller picks one.
pub const DEFAULT_SPEED_MS: u32 = 500;

/// Playback state for one traced run.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct Playback {
    running: bool,
    /// None = before the first event
    position: Option<usize>,
    steps: Vec<TraceEvent>,
    speed: u32,
    start_node: Option<String>,
    end_node: Option<String>,
}

impl Default for Playback {
    fn default() -> Self {
        Playback {
            running: false,
            position: None,
            steps: Vec::new(),
            speed: DEFAULT_SPEED_MS,
            start_node: None,
            end_node: None,
        }
    }
}

#[wasm_bindgen]
impl Playback {
    /// Create a stopped, empty playback.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Playback {
        Playback::default()
    }

    /// Start replaying a JSON-encoded trace.
    pub fn load(
        &mut self,
        trace_json: &str,
        speed: u32,
        start_node: Option<String>,
        end_node: Option<String>,
    ) -> Result<(), JsError> {
        let steps = trace_from_json(trace_json)?;
        self.start(steps, speed, start_node, end_node);
        Ok(())
    }

    /// Advance one event, clamped at the last one.
    #[wasm_bindgen(js_name = nextStep)]
    pub fn next_step(&mut self) {
        let Some(last) = self.steps.len().checked_sub(1) else {
            return;
        };
        self.position = Some(match self.position {
            None => 0,
            Some(p) => (p + 1).min(last),
        });
    }

    /// Rewind one event, clamped at "before the first event".
    #[wasm_bindgen(js_name = previousStep)]
    pub fn previous_step(&mut self) {
        self.position = self.position.and_then(|p| p.checked_sub(1));
    }

    /// Stop and clear the run.
    pub fn stop(&mut self) {
        *self = Playback::default();
    }

    #[wasm_bindgen(js_name = setSpeed)]
    pub fn set_speed(&mut self, speed: u32) {
        self.speed = speed;
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current index, -1 before the first event.
    #[wasm_bindgen(js_name = currentStep)]
    pub fn current_step(&self) -> i32 {
        self.position
            .and_then(|p| i32::try_from(p).ok())
            .unwrap_or(-1)
    }

    /// Number of events in the loaded trace.
    #[wasm_bindgen(js_name = stepCount)]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Current event as a JS object, or null.
    #[wasm_bindgen(js_name = currentEvent)]
    pub fn current_event(&self) -> JsValue {
        self.current()
            .and_then(|e| serde_wasm_bindgen::to_value(e).ok())
            .unwrap_or(JsValue::NULL)
    }

    #[wasm_bindgen(js_name = startNode)]
    pub fn start_node(&self) -> Option<String> {
        self.start_node.clone()
    }

    #[wasm_bindgen(js_name = endNode)]
    pub fn end_node(&self) -> Option<String> {
        self.end_node.clone()
    }
}

impl Playback {
    /// Start replaying `steps` from before the first event.
    pub fn start(
        &mut self,
        steps: Vec<TraceEvent>,
        speed: u32,
        start_node: Option<String>,
        end_node: Option<String>,
    ) {
        log::debug!("playback: {} step(s) at {speed}ms", steps.len());
        *self = Playback {
            running: true,
            position: None,
            steps,
            speed,
            start_node,
            end_node,
        };
    }

    /// Event at the cursor, if any.
    pub fn current(&self) -> Option<&TraceEvent> {
        self.position.and_then(|p| self.steps.get(p))
    }

    /// Events up to and including the cursor, for rebuilding colors.
    pub fn replayed(&self) -> &[TraceEvent] {
        match self.position {
            Some(p) => &self.steps[..=p.min(self.steps.len().saturating_sub(1))],
            None => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::bfs::bfs;
    use crate::graph::Graph;

    fn loaded() -> Playback {
        let g = Graph::from_pairs(&["a", "b"], &[("a", "b", 1.0)]);
        let mut p = Playback::new();
        p.start(bfs(&g, "a"), 250, Some("a".to_string()), None);
        p
    }

    #[test]
    fn test_new_playback() {
        let p = Playback::new();
        assert!(!p.is_running());
        assert_eq!(p.current_step(), -1);
        assert_eq!(p.speed(), DEFAULT_SPEED_MS);
        assert!(p.current().is_none());
    }

    #[test]
    fn test_step_forward_clamps() {
        let mut p = loaded();
        assert!(p.is_running());
        assert_eq!(p.step_count(), 7);
        for _ in 0..20 {
            p.next_step();
        }
        assert_eq!(p.current_step(), 6);
        assert_eq!(p.replayed().len(), 7);
    }

    #[test]
    fn test_step_backward_clamps() {
        let mut p = loaded();
        p.next_step();
        p.next_step();
        assert_eq!(p.current().unwrap().kind, crate::trace::StepKind::Visit);
        p.previous_step();
        p.previous_step();
        p.previous_step();
        assert_eq!(p.current_step(), -1);
        assert!(p.replayed().is_empty());
    }

    #[test]
    fn test_forward_then_back_is_stable() {
        let mut p = loaded();
        p.next_step();
        p.next_step();
        let before = p.current().cloned();
        p.next_step();
        p.previous_step();
        assert_eq!(p.current().cloned(), before);
    }

    #[test]
    fn test_empty_trace_never_moves() {
        let mut p = Playback::new();
        p.start(Vec::new(), 100, None, None);
        p.next_step();
        assert_eq!(p.current_step(), -1);
    }

    #[test]
    fn test_stop_resets() {
        let mut p = loaded();
        p.next_step();
        p.set_speed(50);
        p.stop();
        assert!(!p.is_running());
        assert_eq!(p.step_count(), 0);
        assert_eq!(p.speed(), DEFAULT_SPEED_MS);
        assert_eq!(p.start_node(), None);
    }
}
