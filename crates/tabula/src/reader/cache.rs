use super::{Load, ReaderPlan};
use crate::{Error, Result};

use dashmap::DashMap;
use std::{
    any::{Any, TypeId},
    sync::{Arc, LazyLock},
};
use tabula_core::schema::RowShape;
use tracing::debug;

type PlanKey = (String, TypeId);

/// Compiled plans, never evicted. A shape is a fact about a query that was
/// already issued, so an entry never goes stale.
static PLANS: LazyLock<DashMap<PlanKey, Arc<dyn Any + Send + Sync>>> = LazyLock::new(DashMap::new);

/// Returns the plan reading rows of `shape` as `T`, compiling it on first
/// use.
///
/// Two threads racing on the same key may both compile; the first plan
/// stored is the one every caller gets.
pub fn plan_for<T: Load>(shape: &RowShape) -> Result<Arc<ReaderPlan<T>>> {
    let key = (shape.key(), TypeId::of::<T>());

    if let Some(plan) = PLANS.get(&key) {
        return downcast(plan.value().clone());
    }

    let compiled: Arc<dyn Any + Send + Sync> = Arc::new(T::compile(shape)?);
    debug!(
        ty = std::any::type_name::<T>(),
        columns = %key.0,
        "compiled reader plan"
    );

    let plan = PLANS.entry(key).or_insert(compiled).value().clone();
    downcast(plan)
}

fn downcast<T: Load>(plan: Arc<dyn Any + Send + Sync>) -> Result<Arc<ReaderPlan<T>>> {
    plan.downcast::<ReaderPlan<T>>().map_err(|_| {
        Error::invalid_reader(format!(
            "cached reader plan is not a plan for `{}`",
            std::any::type_name::<T>()
        ))
    })
}
