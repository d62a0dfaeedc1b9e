//! In-memory stand-ins for the SDK and the DOM containers.

use crate::surface::{SurfaceSink, VideoSurface};
use crate::video_client::{CaptureOptions, ClientError, EventSender, InitOptions, VideoClient};
use futures::channel::oneshot;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use videotile_types::{ParticipantId, VendorEvent, VideoQuality};

/// A surface that records whether it was removed.
#[derive(Clone, Debug)]
pub struct FakeSurface {
    pub participant: ParticipantId,
    removed: Rc<Cell<bool>>,
}

impl FakeSurface {
    pub fn new(participant: ParticipantId) -> Self {
        Self {
            participant,
            removed: Rc::new(Cell::new(false)),
        }
    }

    pub fn is_removed(&self) -> bool {
        self.removed.get()
    }
}

impl VideoSurface for FakeSurface {
    fn remove(&self) {
        self.removed.set(true);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Init(InitOptions),
    Subscribe,
    Unsubscribe,
    Join {
        session_name: String,
        token: String,
        display_name: String,
    },
    StartVideo(CaptureOptions),
    StopVideo,
    Attach(ParticipantId, VideoQuality),
    Detach(ParticipantId),
    Leave,
}

/// Scripted SDK client that logs every call.
#[derive(Default)]
pub struct FakeVideoClient {
    calls: RefCell<Vec<Call>>,
    events: RefCell<Option<EventSender>>,
    /// Assigned on a successful join.
    pub user_id: Cell<Option<ParticipantId>>,
    pub self_id_on_join: Cell<u32>,
    pub fail_init: Cell<bool>,
    pub fail_join: Cell<bool>,
    pub fail_start_video: Cell<bool>,
    pub fail_attach: Cell<bool>,
    pub fail_detach: Cell<bool>,
    /// Number of elements `detach_video` returns per participant.
    pub detach_fanout: Cell<usize>,
    attached: RefCell<HashMap<ParticipantId, FakeSurface>>,
    join_gate: Gate,
    start_video_gate: Gate,
    attach_gate: Gate,
}

/// Holds the next call to a method until the paired sender fires or drops.
#[derive(Default)]
struct Gate(RefCell<Option<oneshot::Receiver<()>>>);

impl Gate {
    fn close(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.0.borrow_mut() = Some(rx);
        tx
    }

    async fn pass(&self) {
        let gate = self.0.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
    }
}

impl FakeVideoClient {
    pub fn new(self_id: u32) -> Self {
        let client = Self::default();
        client.self_id_on_join.set(self_id);
        client.detach_fanout.set(1);
        client
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    pub fn position(&self, pred: impl Fn(&Call) -> bool) -> Option<usize> {
        self.calls.borrow().iter().position(pred)
    }

    pub fn is_subscribed(&self) -> bool {
        self.events.borrow().is_some()
    }

    /// Deliver an event the way the SDK would.
    pub fn emit(&self, event: impl Into<VendorEvent>) -> bool {
        match self.events.borrow().as_ref() {
            Some(tx) => tx.unbounded_send(event.into()).is_ok(),
            None => false,
        }
    }

    /// The next `join` waits until the returned sender fires.
    pub fn hold_join(&self) -> oneshot::Sender<()> {
        self.join_gate.close()
    }

    /// The next `start_video` waits until the returned sender fires.
    pub fn hold_start_video(&self) -> oneshot::Sender<()> {
        self.start_video_gate.close()
    }

    /// The next `attach_video` waits until the returned sender fires.
    pub fn hold_attach(&self) -> oneshot::Sender<()> {
        self.attach_gate.close()
    }

    /// Last surface handed out for a participant.
    pub fn surface_of(&self, participant: ParticipantId) -> Option<FakeSurface> {
        self.attached.borrow().get(&participant).cloned()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl VideoClient for FakeVideoClient {
    type Surface = FakeSurface;
    type Subscription = ();

    async fn init(&self, options: &InitOptions) -> Result<(), ClientError> {
        self.record(Call::Init(options.clone()));
        if self.fail_init.get() {
            return Err(ClientError::vendor("init", "dependent assets unreachable"));
        }
        Ok(())
    }

    fn subscribe(&self, events: EventSender) -> Result<(), ClientError> {
        self.record(Call::Subscribe);
        *self.events.borrow_mut() = Some(events);
        Ok(())
    }

    fn unsubscribe(&self, _subscription: ()) {
        self.record(Call::Unsubscribe);
        self.events.borrow_mut().take();
    }

    async fn join(
        &self,
        session_name: &str,
        token: &str,
        display_name: &str,
    ) -> Result<(), ClientError> {
        self.record(Call::Join {
            session_name: session_name.to_string(),
            token: token.to_string(),
            display_name: display_name.to_string(),
        });
        self.join_gate.pass().await;
        if self.fail_join.get() {
            return Err(ClientError::vendor("join", "Invalid token"));
        }
        self.user_id.set(Some(ParticipantId(self.self_id_on_join.get())));
        Ok(())
    }

    async fn start_video(&self, options: &CaptureOptions) -> Result<(), ClientError> {
        self.record(Call::StartVideo(*options));
        self.start_video_gate.pass().await;
        if self.fail_start_video.get() {
            return Err(ClientError::vendor("start video", "camera is in use"));
        }
        Ok(())
    }

    async fn stop_video(&self) -> Result<(), ClientError> {
        self.record(Call::StopVideo);
        Ok(())
    }

    async fn attach_video(
        &self,
        participant: ParticipantId,
        quality: VideoQuality,
    ) -> Result<FakeSurface, ClientError> {
        self.record(Call::Attach(participant, quality));
        self.attach_gate.pass().await;
        if self.fail_attach.get() {
            return Err(ClientError::vendor("attach video", "user has no video"));
        }
        let surface = FakeSurface::new(participant);
        self.attached
            .borrow_mut()
            .insert(participant, surface.clone());
        Ok(surface)
    }

    async fn detach_video(
        &self,
        participant: ParticipantId,
    ) -> Result<Vec<FakeSurface>, ClientError> {
        self.record(Call::Detach(participant));
        if self.fail_detach.get() {
            return Err(ClientError::vendor("detach video", "no such user"));
        }
        let Some(surface) = self.attached.borrow_mut().remove(&participant) else {
            return Ok(Vec::new());
        };
        Ok(vec![surface; self.detach_fanout.get()])
    }

    fn current_user(&self) -> Option<ParticipantId> {
        self.user_id.get()
    }

    async fn leave(&self) -> Result<(), ClientError> {
        self.record(Call::Leave);
        self.user_id.set(None);
        Ok(())
    }
}

/// Container that remembers what was appended to it. Clones share state.
#[derive(Clone, Default)]
pub struct FakeSink {
    surfaces: Rc<RefCell<Vec<FakeSurface>>>,
    clears: Rc<Cell<usize>>,
    pub fail_attach: Rc<Cell<bool>>,
}

impl FakeSink {
    /// Surfaces appended here and not removed since.
    pub fn visible(&self) -> Vec<ParticipantId> {
        self.surfaces
            .borrow()
            .iter()
            .filter(|s| !s.is_removed())
            .map(|s| s.participant)
            .collect()
    }

    pub fn appended(&self) -> usize {
        self.surfaces.borrow().len()
    }

    pub fn clears(&self) -> usize {
        self.clears.get()
    }
}

impl SurfaceSink<FakeSurface> for FakeSink {
    fn attach(&self, surface: &FakeSurface) -> Result<(), ClientError> {
        if self.fail_attach.get() {
            return Err(ClientError::Surface("container detached from document".into()));
        }
        self.surfaces.borrow_mut().push(surface.clone());
        Ok(())
    }

    fn clear(&self) {
        self.clears.set(self.clears.get() + 1);
        for surface in self.surfaces.borrow().iter() {
            surface.remove();
        }
    }
}
