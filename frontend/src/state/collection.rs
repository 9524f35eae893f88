use crate::api::ApiError;
use leptos::*;

/// What a page renders for one remote collection. A failed fetch becomes an
/// empty list plus the error, so one collection failing never hides another.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionView<T> {
    pub items: Vec<T>,
    pub error: Option<ApiError>,
}

impl<T> Default for CollectionView<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            error: None,
        }
    }
}

impl<T> CollectionView<T> {
    pub fn from_result(result: Result<Vec<T>, ApiError>) -> Self {
        match result {
            Ok(items) => Self { items, error: None },
            Err(error) => Self {
                items: Vec::new(),
                error: Some(error),
            },
        }
    }

    /// `None` while the fetch has not resolved yet.
    pub fn from_pending(result: Option<Result<Vec<T>, ApiError>>) -> Self {
        result.map(Self::from_result).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Resource slot holding one fetched collection.
pub type CollectionResource<S, T> = Resource<S, Result<Vec<T>, ApiError>>;

pub fn collection_signal<S, T>(resource: CollectionResource<S, T>) -> Signal<CollectionView<T>>
where
    S: Clone + 'static,
    T: Clone + 'static,
{
    Signal::derive(move || CollectionView::from_pending(resource.get()))
}

/// Number of fetched items; pending and failed fetches count as zero.
pub fn fetched_len<S, T>(resource: CollectionResource<S, T>) -> usize
where
    S: Clone + 'static,
    T: Clone + 'static,
{
    resource.with(|slot| {
        slot.as_ref()
            .and_then(|result| result.as_ref().ok())
            .map(Vec::len)
            .unwrap_or(0)
    })
}

/// True until both resources hold a value.
pub fn loading_until_both<S1, T1, S2, T2>(
    first: Resource<S1, T1>,
    second: Resource<S2, T2>,
) -> Signal<bool>
where
    S1: Clone + 'static,
    T1: Clone + 'static,
    S2: Clone + 'static,
    T2: Clone + 'static,
{
    Signal::derive(move || {
        first.loading().get()
            || second.loading().get()
            || first.with(Option::is_none)
            || second.with(Option::is_none)
    })
}
