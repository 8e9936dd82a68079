use serde_json::Value;
use tokio::sync::Mutex;

/// In-memory post and schedule lists owned by the server state.
#[derive(Debug, Default)]
pub struct PostStore {
    posts: Mutex<Vec<Value>>,
    scheduled: Mutex<Vec<Value>>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list_posts(&self) -> Vec<Value> {
        let guard = self.posts.lock().await;
        guard.clone()
    }

    pub async fn create_post(&self, post: Value) -> Value {
        let mut guard = self.posts.lock().await;
        guard.push(post.clone());
        post
    }

    pub async fn list_scheduled(&self) -> Vec<Value> {
        let guard = self.scheduled.lock().await;
        guard.clone()
    }

    pub async fn schedule(&self, post: Value) -> Value {
        let mut guard = self.scheduled.lock().await;
        guard.push(post.clone());
        post
    }

    pub async fn scheduled_count(&self) -> usize {
        self.scheduled.lock().await.len()
    }
}
