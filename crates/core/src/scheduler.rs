//! Tick scheduler - cooperative round-robin driver for all tasks.
//!
//! Every task is a resumable state machine. One tick resumes each live task
//! exactly once, in registration order. A task never blocks: it does one unit
//! of work, then returns [`Step::Yield`] to be resumed next tick or
//! [`Step::Done`] to be removed.
//!
//! Tasks live in a slot arena addressed by stable keys. Each pass iterates a
//! snapshot of keys, so removing a finished task never disturbs the rest of the
//! pass. Tasks spawned during a pass are queued and appended after it.

use slotmap::{new_key_type, Key, SlotMap};

use crate::canvas::Canvas;
use crate::debris::Debris;
use crate::fire::Projectile;
use crate::ship::Spaceship;
use crate::spawner::DebrisSpawner;
use crate::star::StarBlink;
use crate::world::World;

/// Outcome of resuming a task once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Resume again next tick.
    Yield,
    /// Finished; remove from the roster.
    Done,
}

impl Step {
    pub fn is_done(&self) -> bool {
        matches!(self, Step::Done)
    }
}

/// Everything a task may touch while it runs.
pub struct TickContext<'a> {
    pub canvas: &'a mut dyn Canvas,
    pub world: &'a mut World,
    spawned: &'a mut Vec<Task>,
}

impl<'a> TickContext<'a> {
    pub fn new(
        canvas: &'a mut dyn Canvas,
        world: &'a mut World,
        spawned: &'a mut Vec<Task>,
    ) -> Self {
        Self {
            canvas,
            world,
            spawned,
        }
    }

    /// Request a new task. It joins the roster after the current pass.
    pub fn spawn(&mut self, task: Task) {
        self.spawned.push(task);
    }
}

/// A resumable unit of work.
pub trait Routine {
    fn step(&mut self, ctx: &mut TickContext<'_>) -> Step;
}

/// Arena of items kept in insertion order.
#[derive(Debug, Clone)]
pub struct Roster<K: Key, T> {
    slots: SlotMap<K, T>,
    order: Vec<K>,
}

impl<K: Key, T> Default for Roster<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key, T> Roster<K, T> {
    pub fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Append an item at the end of the order.
    pub fn push(&mut self, item: T) -> K {
        let key = self.slots.insert(item);
        self.order.push(key);
        key
    }

    pub fn remove(&mut self, key: K) -> Option<T> {
        let item = self.slots.remove(key)?;
        self.order.retain(|k| *k != key);
        Some(item)
    }

    pub fn get(&self, key: K) -> Option<&T> {
        self.slots.get(key)
    }

    pub fn get_mut(&mut self, key: K) -> Option<&mut T> {
        self.slots.get_mut(key)
    }

    /// Snapshot of the current order.
    pub fn keys(&self) -> Vec<K> {
        self.order.clone()
    }

    /// First `n` keys of the current order.
    pub fn first_keys(&self, n: usize) -> Vec<K> {
        self.order.iter().take(n).copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|k| self.slots.get(*k))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Every kind of task the scheduler drives.
#[derive(Debug, Clone)]
pub enum Task {
    Star(StarBlink),
    Spawner(DebrisSpawner),
    Debris(Debris),
    Ship(Spaceship),
    Fire(Projectile),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Star,
    Spawner,
    Debris,
    Ship,
    Fire,
}

impl Task {
    pub fn kind(&self) -> TaskKind {
        match self {
            Task::Star(_) => TaskKind::Star,
            Task::Spawner(_) => TaskKind::Spawner,
            Task::Debris(_) => TaskKind::Debris,
            Task::Ship(_) => TaskKind::Ship,
            Task::Fire(_) => TaskKind::Fire,
        }
    }
}

impl Routine for Task {
    fn step(&mut self, ctx: &mut TickContext<'_>) -> Step {
        match self {
            Task::Star(t) => t.step(ctx),
            Task::Spawner(t) => t.step(ctx),
            Task::Debris(t) => t.step(ctx),
            Task::Ship(t) => t.step(ctx),
            Task::Fire(t) => t.step(ctx),
        }
    }
}

new_key_type! {
    pub struct TaskKey;
}

/// Counters for one scheduler pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub resumed: usize,
    pub finished: usize,
    pub spawned: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    tasks: Roster<TaskKey, Task>,
    pending: Vec<Task>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task at the end of the order.
    pub fn push(&mut self, task: Task) -> TaskKey {
        self.tasks.push(task)
    }

    pub fn get(&self, key: TaskKey) -> Option<&Task> {
        self.tasks.get(key)
    }

    /// Live tasks in resumption order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn count(&self, kind: TaskKind) -> usize {
        self.tasks.iter().filter(|t| t.kind() == kind).count()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Resume every live task once, then apply spawn requests.
    pub fn tick(&mut self, canvas: &mut dyn Canvas, world: &mut World) -> TickReport {
        let mut report = TickReport::default();

        for key in self.tasks.keys() {
            let Some(task) = self.tasks.get_mut(key) else {
                continue;
            };
            let mut ctx = TickContext::new(&mut *canvas, &mut *world, &mut self.pending);
            let step = task.step(&mut ctx);
            report.resumed += 1;
            if step.is_done() {
                if let Some(task) = self.tasks.remove(key) {
                    log::trace!("task {:?} finished", task.kind());
                }
                report.finished += 1;
            }
        }

        for task in self.pending.drain(..) {
            log::trace!("task {:?} spawned", task.kind());
            self.tasks.push(task);
            report.spawned += 1;
        }

        world.advance_tick();
        report
    }
}
