use rtrb::Producer;

use super::state::Snapshot;

/// Receives a fresh snapshot after every game state change.
pub trait Observer {
    fn notify(&mut self, snapshot: &Snapshot);
}

/// Ring-buffer channel to the render loop. When the ring is full the new
/// snapshot is dropped and the older ones stay queued, so the queue must be
/// sized above the changes that can happen between two reads. The UI drains
/// it every frame.
impl Observer for Producer<Snapshot> {
    fn notify(&mut self, snapshot: &Snapshot) {
        let _ = self.push(snapshot.clone());
    }
}

impl<O: Observer + ?Sized> Observer for Box<O> {
    fn notify(&mut self, snapshot: &Snapshot) {
        (**self).notify(snapshot)
    }
}
