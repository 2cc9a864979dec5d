//! In-memory member store
//!
//! DashMap-backed implementation of [`MemberStore`]. A mutating access
//! holds the map shard lock for its member id, which makes every
//! `apply_delta` atomic per member without any global lock.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tokio::sync::broadcast;

use shared::models::{BusinessProfile, Member};
use shared::{AppError, AppResult, ledger};

use super::{MemberEvent, MemberStore};

/// Capacity of the change feed; slow subscribers lag, writers never block.
const EVENT_CHANNEL_CAPACITY: usize = 256;

pub struct MemoryStore {
    profile: Arc<BusinessProfile>,
    members: DashMap<String, Member>,
    events: broadcast::Sender<MemberEvent>,
}

impl MemoryStore {
    pub fn new(profile: Arc<BusinessProfile>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            profile,
            members: DashMap::new(),
            events,
        }
    }

    fn publish(&self, event: MemberEvent) {
        // Err just means nobody is subscribed right now
        let _ = self.events.send(event);
    }
}

#[async_trait]
impl MemberStore for MemoryStore {
    async fn get(&self, member_id: &str) -> AppResult<Member> {
        self.members
            .get(member_id)
            .map(|m| m.value().clone())
            .ok_or_else(|| AppError::not_found(format!("member {}", member_id)))
    }

    async fn find_by_card(&self, card_number: &str) -> AppResult<Member> {
        self.members
            .iter()
            .find(|m| m.value().card_number == card_number)
            .map(|m| m.value().clone())
            .ok_or_else(|| AppError::not_found(format!("card {}", card_number)))
    }

    async fn get_or_create(
        &self,
        member_id: &str,
        display_name: Option<String>,
    ) -> AppResult<Member> {
        let mut welcome: Option<MemberEvent> = None;

        let member = match self.members.entry(member_id.to_string()) {
            Entry::Occupied(entry) => entry.get().clone(),
            Entry::Vacant(entry) => {
                let mut member = Member::new(member_id, display_name);
                if self.profile.welcome_bonus > 0 {
                    let tx = ledger::credit(
                        &mut member,
                        self.profile.welcome_bonus,
                        &self.profile.welcome_title,
                    )?;
                    welcome = Some(MemberEvent {
                        member_id: member.id.clone(),
                        points: member.points,
                        transaction: tx,
                    });
                }
                tracing::info!(member_id = %member.id, card_number = %member.card_number, "Member created");
                entry.insert(member).value().clone()
            }
        };

        if let Some(event) = welcome {
            self.publish(event);
        }

        Ok(member)
    }

    async fn apply_delta(&self, member_id: &str, delta: i64, title: &str) -> AppResult<Member> {
        let mut entry = self
            .members
            .get_mut(member_id)
            .ok_or_else(|| AppError::not_found(format!("member {}", member_id)))?;

        // Validation and mutation both run under the shard lock; a failed
        // check leaves the stored member untouched.
        let tx = if delta >= 0 {
            ledger::credit(entry.value_mut(), delta, title)?
        } else {
            ledger::debit(entry.value_mut(), -delta, title)?
        };

        let member = entry.value().clone();
        drop(entry);

        self.publish(MemberEvent {
            member_id: member.id.clone(),
            points: member.points,
            transaction: tx,
        });

        Ok(member)
    }

    fn subscribe(&self) -> broadcast::Receiver<MemberEvent> {
        self.events.subscribe()
    }
}
