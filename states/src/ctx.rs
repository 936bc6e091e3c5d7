use std::{
    any::{TypeId, type_name},
    collections::{BTreeMap, HashMap, VecDeque},
    fmt,
    sync::Arc,
};

use flume::{Receiver, Sender};
use log::{error, warn};
use tokio::task::{self, JoinError, JoinSet};

use crate::{
    Command, CommandSnapshot, Compute, ComputeSnapshot, State, StateSnapshot, TaskId, Updater,
    updater::Update,
};

/// Owner of every state, compute and command of the application.
///
/// Lives on the UI thread. Commands are queued with `enqueue_command` and
/// started by `flush_commands`; their results come back through the
/// [`Updater`] channel and are applied by `sync_computes`.
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    computes: BTreeMap<TypeId, Box<dyn Compute>>,
    commands: BTreeMap<TypeId, Arc<dyn Command>>,

    queue: VecDeque<(TypeId, Arc<dyn Command>)>,

    send: Sender<Update>,
    recv: Receiver<Update>,

    tasks: JoinSet<TaskId>,
    running: HashMap<task::Id, TaskId>,
    generation: u64,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("computes", &self.computes.len())
            .field("commands", &self.commands.len())
            .field("queued", &self.queue.len())
            .field("tasks", &self.tasks.len())
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();

        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            commands: BTreeMap::new(),
            queue: VecDeque::new(),
            send,
            recv,
            tasks: JoinSet::new(),
            running: HashMap::new(),
            generation: 0,
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn try_state<T: State>(&self) -> Option<&T> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
    }

    /// # Panics
    /// Panics if the state type is not registered.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>()
            .unwrap_or_else(|| panic!("State {} is not registered", type_name::<T>()))
    }

    /// # Panics
    /// Panics if the state type is not registered.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("State {} is not registered", type_name::<T>()))
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        self.computes.insert(TypeId::of::<T>(), Box::new(compute));
    }

    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|compute| compute.as_any().downcast_ref::<T>())
    }

    /// # Panics
    /// Panics if the compute type is not registered.
    pub fn compute<T: Compute>(&self) -> &T {
        self.cached::<T>()
            .unwrap_or_else(|| panic!("Compute {} is not registered", type_name::<T>()))
    }

    pub fn record_command<C: Command>(&mut self, command: C) {
        self.commands.insert(TypeId::of::<C>(), Arc::new(command));
    }

    /// Queues the registered instance of `C`.
    pub fn enqueue_command<C: Command>(&mut self) {
        let id = TypeId::of::<C>();
        match self.commands.get(&id) {
            Some(command) => self.queue.push_back((id, Arc::clone(command))),
            None => warn!(
                "enqueue_command: {} is not registered, dropped",
                type_name::<C>()
            ),
        }
    }

    /// Queues a one-off command value that carries its own input.
    pub fn enqueue<C: Command>(&mut self, command: C) {
        self.queue.push_back((TypeId::of::<C>(), Arc::new(command)));
    }

    /// Queues the registered instance of `C` and flushes the queue.
    pub fn dispatch<C: Command>(&mut self) {
        self.enqueue_command::<C>();
        self.flush_commands();
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    /// Applies every queued compute update, oldest first.
    pub fn sync_computes(&mut self) {
        self.reap_tasks();

        while let Ok(update) = self.recv.try_recv() {
            self.apply(update);
        }
    }

    fn apply(&mut self, update: Update) {
        match update {
            Update::Set(id, value) => match self.computes.get_mut(&id) {
                Some(compute) => compute.assign_box(value),
                None => warn!("sync_computes: set for unregistered compute {id:?}"),
            },
            Update::Modify(id, modify) => match self.computes.get_mut(&id) {
                Some(compute) => modify(compute.as_any_mut()),
                None => warn!("sync_computes: update for unregistered compute {id:?}"),
            },
        }
    }

    fn snapshot(&self) -> CommandSnapshot {
        let mut states = StateSnapshot::new();
        for (id, state) in &self.states {
            if let Some(value) = state.snapshot() {
                states.insert_cloned(*id, value);
            }
        }

        let mut computes = ComputeSnapshot::new();
        for (id, compute) in &self.computes {
            if let Some(value) = compute.snapshot() {
                computes.insert_cloned(*id, value);
            }
        }

        CommandSnapshot::new(states, computes)
    }

    /// Runs every queued command and spawns its future on the task set.
    ///
    /// Each command sees a fresh snapshot, so two queued commands never
    /// observe each other's pending updates.
    ///
    /// # Panics
    /// Panics if called outside of a Tokio runtime.
    pub fn flush_commands(&mut self) {
        while let Some((type_id, command)) = self.queue.pop_front() {
            self.generation += 1;
            let task_id = TaskId::new(type_id, self.generation);

            let future = command.run(self.snapshot(), self.updater());
            let handle = self.tasks.spawn(async move {
                future.await;
                task_id
            });
            self.running.insert(handle.id(), task_id);
        }
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Number of unfinished tasks spawned by command `C`.
    pub fn running<C: Command>(&self) -> usize {
        let id = TypeId::of::<C>();
        self.running
            .values()
            .filter(|task| task.type_id() == id)
            .count()
    }

    /// Waits for the next task to finish. Returns `false` when none are left.
    pub async fn join_next(&mut self) -> bool {
        match self.tasks.join_next().await {
            Some(result) => {
                self.finish(result);
                true
            }
            None => false,
        }
    }

    fn reap_tasks(&mut self) {
        while let Some(result) = self.tasks.try_join_next() {
            self.finish(result);
        }
    }

    fn finish(&mut self, result: Result<TaskId, JoinError>) {
        match result {
            Ok(task_id) => self.running.retain(|_, running| *running != task_id),
            Err(err) => {
                if !err.is_cancelled() {
                    error!("StateCtx: command task failed: {err}");
                }
                self.running.remove(&err.id());
            }
        }
    }

    /// Aborts every running task and drops queued commands.
    pub async fn shutdown(&mut self) {
        self.queue.clear();
        self.tasks.abort_all();
        while let Some(result) = self.tasks.join_next().await {
            self.finish(result);
        }
    }
}
