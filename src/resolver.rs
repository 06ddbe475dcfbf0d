//! Event queue, dispatch ordering, and loop detection.
//!
//! `Engine::publish` is the only way an event enters the queue;
//! `Engine::drain` is the only way events become effective. Draining is
//! reentrant-safe: a nested call (an ability's `execute` calling `push_move`
//! while the outer `drain` is still running) is a no-op, because the
//! already-running loop will reach the newly queued events in its own time.

use std::collections::{HashSet, VecDeque};

use crate::ability::{Ability, AbilityOutcome};
use crate::engine::Engine;
use crate::event::{Event, EventTag};
use crate::ids::{EventId, RacerIdx};
use crate::modifier::RacerModifier;
use crate::types::{ErrorCode, TimingMode};

/// Inert stand-in used while an ability/modifier is temporarily moved out
/// of its racer's list so it can be called with `&mut Engine` without
/// aliasing its own storage.
#[derive(Debug)]
pub(crate) struct NullAbility;

impl Ability for NullAbility {
    fn name(&self) -> &'static str {
        "Null"
    }
    fn triggers(&self) -> &'static [EventTag] {
        &[]
    }
    fn execute(&self, _event: &Event, _owner_idx: RacerIdx, _engine: &mut Engine) -> AbilityOutcome {
        AbilityOutcome::Skip
    }
}

#[derive(Debug)]
pub(crate) struct NullModifier;

impl RacerModifier for NullModifier {
    fn name(&self) -> &'static str {
        "Null"
    }
    fn identity(&self) -> String {
        "Null".to_string()
    }
    fn clone_box(&self) -> Box<dyn RacerModifier> {
        Box::new(NullModifier)
    }
}

#[derive(Default)]
pub(crate) struct ResolverState {
    pub queue: VecDeque<Event>,
    pub draining: bool,
    pub next_event_id: u64,
    pub firing_memo: HashSet<(String, u64)>,
    pub steps_this_drain: u32,
}

impl Engine {
    pub(crate) fn next_event_id(&mut self) -> EventId {
        let id = self.resolver.next_event_id;
        self.resolver.next_event_id += 1;
        EventId(id)
    }

    /// Append an event to the back of the queue. Does not dispatch it —
    /// call `drain` to process the queue.
    pub fn publish(&mut self, event: Event) {
        self.resolver.queue.push_back(event);
    }

    /// Process the queue to a fixed point. No-op if already draining
    /// (reentrant call from inside an ability).
    pub fn drain(&mut self) -> Result<(), ErrorCode> {
        if self.resolver.draining {
            return Ok(());
        }
        self.resolver.draining = true;
        self.resolver.firing_memo.clear();
        self.resolver.steps_this_drain = 0;

        let result = self.drain_loop();
        self.resolver.draining = false;
        result
    }

    fn drain_loop(&mut self) -> Result<(), ErrorCode> {
        while let Some(event) = self.resolver.queue.pop_front() {
            self.step(&event)?;
        }
        Ok(())
    }

    /// Counts one dispatch step against the per-drain bound, then dispatches.
    fn step(&mut self, event: &Event) -> Result<(), ErrorCode> {
        self.resolver.steps_this_drain += 1;
        if self.resolver.steps_this_drain > self.rules.max_steps_per_drain {
            self.resolver.queue.clear();
            return Err(ErrorCode::CriticalLoopDetected);
        }
        self.dispatch(event)
    }

    /// Under `TimingMode::Dfs`, fully processes every event a single
    /// listener just appended (in the order it appended them, including
    /// whatever those cascade into) before `dispatch` moves on to the next
    /// listener. `before_len` is the queue length captured right before the
    /// listener ran; only the events it appended sit past that point.
    fn settle_dfs(&mut self, before_len: usize) -> Result<(), ErrorCode> {
        while self.resolver.queue.len() > before_len {
            let Some(event) = self.resolver.queue.pop_front() else { break };
            self.step(&event)?;
        }
        Ok(())
    }

    /// Ordered (racer, ability-index) pairs interested in `tag`: racer
    /// index ascending, then an individual racer's ability-registration
    /// order.
    fn dispatch_order(&self, tag: EventTag) -> Vec<(RacerIdx, usize)> {
        let mut order = Vec::new();
        for racer in &self.racers {
            if racer.finished {
                continue;
            }
            for (ai, ability) in racer.abilities.iter().enumerate() {
                if ability.triggers().contains(&tag) {
                    order.push((racer.idx, ai));
                }
            }
        }
        order
    }

    fn dispatch(&mut self, event: &Event) -> Result<(), ErrorCode> {
        let trace_line = format!("{:?} responsible={} target={:?}", event.tag(), event.responsible_racer_idx, event.target_racer_idx);
        self.log_debug(&trace_line);
        let dfs = self.rules.timing_mode == TimingMode::Dfs;

        for (racer_idx, ai) in self.dispatch_order(event.tag()) {
            if self.racer(racer_idx).finished {
                continue;
            }
            let name = self.racer(racer_idx).abilities[ai].name();
            let memo_key = (format!("{racer_idx}:{name}"), event.id.0);
            if self.resolver.firing_memo.contains(&memo_key) {
                continue;
            }
            self.resolver.firing_memo.insert(memo_key);

            let before_len = self.resolver.queue.len();
            let mut ability: Box<dyn Ability> = std::mem::replace(
                &mut self.racer_mut(racer_idx).abilities[ai],
                Box::new(NullAbility),
            );
            let outcome = ability.execute(event, racer_idx, self);
            self.racer_mut(racer_idx).abilities[ai] = ability;

            if let AbilityOutcome::Triggered { target_racer_idx } = outcome {
                self.publish_ability_triggered(event.phase, racer_idx, target_racer_idx, name);
            }

            // BFS (the default): leave every reaction queued at the back,
            // so all of `event`'s listeners run before any of them fire.
            // DFS: settle what this one listener just emitted, cascades
            // included, before moving on to the next listener.
            if dfs {
                self.settle_dfs(before_len)?;
            }
        }
        Ok(())
    }
}
