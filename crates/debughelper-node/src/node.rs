use serde_json::Map;

use debughelper_core::{
    ExecuteContext, Item, NodeDescription, NodeError, NodeType, PairedItem, Result, parameter,
};
use debughelper_generate::{RandomDataType, generate_many, rng_from_seed};

use crate::description::node_description;
use crate::memory::generate_garbage_memory;
use crate::model::{
    CATEGORY, Category, MEMORY_SIZE_VALUE, RANDOM_DATA_COUNT, RANDOM_DATA_SEED, RANDOM_DATA_TYPE,
    THROW_ERROR_MESSAGE, THROW_ERROR_TYPE, ThrowErrorType, record_count,
};

/// Key under which `randomData` stores its records.
pub const GENERATED_ITEMS_KEY: &str = "generatedItems";

/// Diagnostic node that fails, exhausts memory, or emits fixture data on
/// purpose.
#[derive(Debug, Default, Clone, Copy)]
pub struct DebugHelper;

impl NodeType for DebugHelper {
    fn description(&self) -> NodeDescription {
        node_description()
    }

    fn execute(&self, ctx: &dyn ExecuteContext) -> Result<Vec<Item>> {
        let items = ctx.input_items();
        let category: Category = parameter(ctx, CATEGORY, 0)?;
        tracing::info!(
            event = "execute_started",
            node = %ctx.node().name,
            category = %category,
            items = items.len()
        );

        let mut output = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match process_item(ctx, category, index, item) {
                Ok(item) => output.push(item),
                Err(err) => {
                    tracing::warn!(
                        event = "item_failed",
                        item_index = index,
                        kind = err.kind(),
                        error = %err
                    );
                    if ctx.continue_on_fail() {
                        output.push(Item::failed(index, err.to_string()));
                        continue;
                    }
                    return Err(err);
                }
            }
        }

        tracing::info!(event = "execute_finished", outputs = output.len());
        Ok(output)
    }
}

fn process_item(
    ctx: &dyn ExecuteContext,
    category: Category,
    index: usize,
    mut item: Item,
) -> Result<Item> {
    match category {
        Category::DoNothing => Ok(item),
        Category::ThrowError => Err(thrown_error(ctx)?),
        Category::Oom => {
            let size: f64 = parameter(ctx, MEMORY_SIZE_VALUE, 0)?;
            let report = generate_garbage_memory(size)?;
            item.json = report.to_json()?;
            Ok(item)
        }
        Category::RandomData => {
            let kind: RandomDataType = parameter(ctx, RANDOM_DATA_TYPE, 0)?;
            let count = record_count(parameter(ctx, RANDOM_DATA_COUNT, 0)?)
                .map_err(|reason| NodeError::invalid_parameter(RANDOM_DATA_COUNT, reason))?;
            let seed: String = parameter(ctx, RANDOM_DATA_SEED, 0)?;

            // Reseeded per item: a fixed seed yields identical arrays for every item.
            let mut rng = rng_from_seed(&seed);
            let generated = generate_many(kind, count as usize, &mut rng);

            let mut json = Map::new();
            json.insert(GENERATED_ITEMS_KEY.to_string(), generated);
            Ok(Item {
                json,
                paired_item: item.paired_item.or(Some(PairedItem { item: index })),
                ..Item::default()
            })
        }
    }
}

/// Build the error the `throwError` category raises.
fn thrown_error(ctx: &dyn ExecuteContext) -> Result<NodeError> {
    let kind: ThrowErrorType = parameter(ctx, THROW_ERROR_TYPE, 0)?;
    let message: String = parameter(ctx, THROW_ERROR_MESSAGE, 0)?;
    let node = ctx.node().clone();

    Ok(match kind {
        ThrowErrorType::NodeApiError => NodeError::Api {
            node,
            description: Some(message.clone()),
            message,
        },
        ThrowErrorType::NodeOperationError => NodeError::Operation {
            node,
            description: Some(message.clone()),
            message,
        },
        ThrowErrorType::Error => NodeError::Generic(message),
    })
}
