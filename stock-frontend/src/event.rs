use std::sync::Arc;

use crossterm::event::Event;
use futures::{Stream, StreamExt};
use stock_keymap::{
    conversion,
    message::{KeySequence, KeymapMessage},
    MessageResolver,
};
use stock_list::model::Mode;
use tokio::{
    select,
    sync::{
        mpsc::{self, Receiver},
        oneshot, Mutex, Notify,
    },
};

use crate::error::AppError;

#[derive(Debug)]
pub struct Envelope {
    pub messages: Vec<Message>,
    pub sequence: KeySequence,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    Keymap(KeymapMessage),
    Resize(u16, u16),
}

pub struct Emitter {
    cancellation: Option<oneshot::Sender<oneshot::Sender<bool>>>,
    mode_synced: Arc<Notify>,
    pub receiver: Receiver<Envelope>,
    resolver: Arc<Mutex<MessageResolver>>,
}

impl Emitter {
    pub fn start() -> Self {
        Self::listen_to(crossterm::event::EventStream::new())
    }

    fn listen_to<S>(events: S) -> Self
    where
        S: Stream<Item = std::io::Result<Event>> + Send + Unpin + 'static,
    {
        let (sender, receiver) = mpsc::channel(1);
        let resolver = Arc::new(Mutex::new(MessageResolver::default()));
        let mode_synced = Arc::new(Notify::new());

        let (cancellation, cancellation_receiver) = oneshot::channel();
        tokio::spawn(listen(
            events,
            cancellation_receiver,
            resolver.clone(),
            mode_synced.clone(),
            sender,
        ));

        Self {
            cancellation: Some(cancellation),
            mode_synced,
            receiver,
            resolver,
        }
    }

    /// Must be called once for every received envelope. The listener holds
    /// back the next event until the mode it resolves against is current.
    pub async fn set_current_mode(&mut self, mode: Mode) {
        let mut resolver = self.resolver.lock().await;
        resolver.mode = mode;
        self.mode_synced.notify_one();
    }

    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.receiver.close();

        if let Some(cancellation) = self.cancellation.take() {
            let (sender, receiver) = oneshot::channel();
            if let Err(error) = cancellation.send(sender) {
                tracing::error!("sending cancellation failed: {:?}", error);
                return Ok(());
            }

            receiver.await?;
        }

        Ok(())
    }
}

async fn listen<S>(
    mut events: S,
    mut cancellation_receiver: oneshot::Receiver<oneshot::Sender<bool>>,
    resolver_mutex: Arc<Mutex<MessageResolver>>,
    mode_synced: Arc<Notify>,
    sender: mpsc::Sender<Envelope>,
) where
    S: Stream<Item = std::io::Result<Event>> + Unpin,
{
    let mut awaiting_mode = false;

    loop {
        if awaiting_mode {
            select! {
                Ok(sender) = &mut cancellation_receiver => {
                    confirm_cancellation(sender);
                    break
                }
                _ = mode_synced.notified() => awaiting_mode = false,
            }
            continue;
        }

        select! {
            Ok(sender) = &mut cancellation_receiver => {
                confirm_cancellation(sender);
                break
            }
            Some(Ok(event)) = events.next() => {
                if let Some(envelope) = handle_crossterm_event(&resolver_mutex, event).await {
                    match sender.send(envelope).await {
                        Ok(()) => awaiting_mode = true,
                        Err(error) => tracing::error!("sending key messages failed: {:?}", error),
                    }
                }
            }
            else => break,
        }
    }
}

fn confirm_cancellation(sender: oneshot::Sender<bool>) {
    if sender.send(true).is_err() {
        tracing::warn!("cancellation receiver dropped before confirmation");
    }
}

async fn handle_crossterm_event(
    resolver_mutex: &Arc<Mutex<MessageResolver>>,
    event: Event,
) -> Option<Envelope> {
    match event {
        Event::Key(key) => {
            if let Some(key) = conversion::to_key(&key) {
                let mut resolver = resolver_mutex.lock().await;
                let (messages, sequence) = resolver.add_key(key);
                return Some(Envelope {
                    messages: messages.into_iter().map(Message::Keymap).collect(),
                    sequence,
                });
            }

            None
        }
        Event::Resize(x, y) => Some(Envelope {
            messages: vec![Message::Resize(x, y)],
            sequence: KeySequence::None,
        }),
        Event::FocusLost
        | Event::FocusGained
        | Event::Paste(_)
        | Event::Mouse(_) => None,
    }
}
