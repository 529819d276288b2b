use core::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::runtime::msg::Msg;
use crate::runtime::{Effect, Effects, Env};

pub trait Model<E: Env>: Clone {
    type Field: Clone + PartialEq + Debug + Send + Sync + Serialize + for<'de> Deserialize<'de>;

    fn update(&mut self, msg: &Msg) -> (Vec<Effect>, Vec<Self::Field>);
    fn update_field(&mut self, msg: &Msg, field: &Self::Field) -> (Vec<Effect>, Vec<Self::Field>);
}

pub trait Update<E: Env> {
    fn update(&mut self, msg: &Msg) -> Effects;
}
