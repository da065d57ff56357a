use std::{ops::Deref, sync::Arc};

use crate::repository::BookRepository;

/// Shared application state, cheap to clone.
///
/// Holds the injected [`BookRepository`]; swapping the concrete
/// implementation here is how the tests run against a fake backend.
#[derive(Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self {
            inner: Arc::new(ApiStateInner { repository }),
        }
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

pub struct ApiStateInner {
    repository: Arc<dyn BookRepository>,
}

impl ApiStateInner {
    pub fn repository(&self) -> &dyn BookRepository {
        self.repository.as_ref()
    }
}
