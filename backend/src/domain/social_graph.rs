//! Social graph engine: the self-referential follow relation.
//!
//! One edge table carries both projections; `following` filters on the
//! follower side, `followers` on the followee side. Duplicate and missing
//! edges are policy denials surfaced as outcome variants, with the store's
//! unique constraint as the sole arbiter under concurrency.

use std::sync::Arc;

use super::identity;
use super::ports::{SocialGraphRepository, UserRepository};
use super::{ApiKey, Error, User, UserId};

/// Result of a follow attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowOutcome {
    Followed,
    /// The edge already existed; denied, not an error.
    AlreadyFollowing,
}

/// Result of an unfollow attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnfollowOutcome {
    Unfollowed,
    /// No such edge existed; denied, not an error.
    NotFollowing,
}

/// A user together with both follow projections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub user: User,
    pub following: Vec<User>,
    pub followers: Vec<User>,
}

/// Engine maintaining and querying the follow relation.
#[derive(Clone)]
pub struct SocialGraphService {
    users: Arc<dyn UserRepository>,
    graph: Arc<dyn SocialGraphRepository>,
}

impl SocialGraphService {
    /// Create a new engine over the given ports.
    pub fn new(users: Arc<dyn UserRepository>, graph: Arc<dyn SocialGraphRepository>) -> Self {
        Self { users, graph }
    }

    /// Resolve the calling user without loading the follow projections.
    pub async fn resolve_caller(&self, api_key: &ApiKey) -> Result<User, Error> {
        identity::resolve(self.users.as_ref(), api_key).await
    }

    /// Profile of the caller identified by `api_key`.
    pub async fn profile(&self, api_key: &ApiKey) -> Result<Profile, Error> {
        let user = identity::resolve(self.users.as_ref(), api_key).await?;
        self.load_relations(user).await
    }

    /// Profile of an arbitrary user by id.
    pub async fn profile_by_id(&self, id: UserId) -> Result<Profile, Error> {
        let user = identity::resolve_by_id(self.users.as_ref(), id).await?;
        self.load_relations(user).await
    }

    /// Insert the follow edge (caller, target).
    ///
    /// Self-follow is deliberately not validated; the unique constraint
    /// still caps any pair at one edge.
    pub async fn follow(&self, api_key: &ApiKey, target: UserId) -> Result<FollowOutcome, Error> {
        let actor = identity::resolve(self.users.as_ref(), api_key).await?;
        let followee = identity::resolve_by_id(self.users.as_ref(), target).await?;
        let inserted = self.graph.insert_edge(actor.id, followee.id).await?;
        Ok(if inserted {
            FollowOutcome::Followed
        } else {
            FollowOutcome::AlreadyFollowing
        })
    }

    /// Remove the follow edge (caller, target).
    pub async fn unfollow(
        &self,
        api_key: &ApiKey,
        target: UserId,
    ) -> Result<UnfollowOutcome, Error> {
        let actor = identity::resolve(self.users.as_ref(), api_key).await?;
        let followee = identity::resolve_by_id(self.users.as_ref(), target).await?;
        let removed = self.graph.delete_edge(actor.id, followee.id).await?;
        Ok(if removed {
            UnfollowOutcome::Unfollowed
        } else {
            UnfollowOutcome::NotFollowing
        })
    }

    async fn load_relations(&self, user: User) -> Result<Profile, Error> {
        let relations = self.graph.relations(user.id).await?;
        Ok(Profile {
            user,
            following: relations.following,
            followers: relations.followers,
        })
    }
}
