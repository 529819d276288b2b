use derivative::Derivative;
use serde::Serialize;

#[derive(Derivative, Clone, PartialEq, Serialize, Debug)]
#[derivative(Default)]
#[serde(tag = "type", content = "content")]
pub enum Loadable<R, E> {
    #[derivative(Default)]
    Loading,
    Ready(R),
    Err(E),
}

impl<R, E> Loadable<R, E> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }
    pub fn is_ready(&self) -> bool {
        matches!(self, Loadable::Ready(_))
    }
    pub fn is_err(&self) -> bool {
        matches!(self, Loadable::Err(_))
    }
    pub fn ready(&self) -> Option<&R> {
        match self {
            Loadable::Ready(ready) => Some(ready),
            _ => None,
        }
    }
}
