// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log;

/// Manages a generic notification channel between a producer and its observer.
///
/// The bus is generic over the message type `T` so that `praxis-core` stays
/// decoupled from the concrete notification types defined by higher-level
/// crates. An editing session owns one bus per editor view; there is no
/// process-wide singleton.
#[derive(Debug)]
pub struct NotificationBus<T: Clone + Send + 'static> {
    sender: flume::Sender<T>,
    receiver: flume::Receiver<T>,
}

impl<T: Clone + Send + 'static> NotificationBus<T> {
    /// Creates a new bus backed by an unbounded channel.
    ///
    /// ## Returns
    /// A new instance of the NotificationBus struct.
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        log::trace!("NotificationBus initialized.");
        Self { sender, receiver }
    }

    /// Attempts to publish a notification, logging an error if the receiver
    /// is disconnected.
    ///
    /// ## Arguments
    /// * `notification` - The notification to be sent over the channel.
    pub fn publish(&self, notification: T) {
        if let Err(e) = self.sender.send(notification) {
            log::error!("Failed to publish notification: {e}. Receiver likely disconnected.");
        }
    }

    /// Returns a clone of the sender end of the channel.
    /// Use this to let collaborators outside the session report changes too.
    ///
    /// ## Returns
    /// A clone of the sender end of the channel.
    pub fn sender(&self) -> flume::Sender<T> {
        self.sender.clone()
    }

    /// Returns a reference to the receiver end of the channel.
    /// Intended for the hosting application to drain notifications.
    ///
    /// ## Returns
    /// A reference to the receiver end of the channel.
    pub fn receiver(&self) -> &flume::Receiver<T> {
        &self.receiver
    }
}

impl<T: Clone + Send + 'static> Default for NotificationBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::ChangeNotification;
    use flume::TryRecvError;

    fn refresh_only() -> ChangeNotification {
        ChangeNotification {
            history_updated: false,
            needs_recompilation: false,
        }
    }

    #[test]
    fn bus_starts_empty() {
        let bus = NotificationBus::<ChangeNotification>::new();
        assert!(bus.receiver().is_empty());
    }

    #[test]
    fn publish_then_drain() {
        let bus = NotificationBus::<ChangeNotification>::new();
        let structural = ChangeNotification {
            history_updated: true,
            needs_recompilation: true,
        };

        bus.publish(structural);
        bus.publish(refresh_only());

        assert_eq!(bus.receiver().try_recv(), Ok(structural));
        assert_eq!(bus.receiver().try_recv(), Ok(refresh_only()));
        assert_eq!(bus.receiver().try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn detached_sender_reaches_the_same_receiver() {
        let bus = NotificationBus::<ChangeNotification>::new();
        let external_sender = bus.sender();

        external_sender
            .send(refresh_only())
            .expect("Send should succeed while the bus is alive");

        assert_eq!(bus.receiver().try_recv(), Ok(refresh_only()));
    }

    #[test]
    fn publish_after_bus_drop_is_absorbed() {
        let bus = NotificationBus::<ChangeNotification>::new();
        let sender = bus.sender();
        drop(bus);

        // The raw sender reports the disconnect; `publish` would only log it.
        assert!(sender.send(refresh_only()).is_err());
    }
}
