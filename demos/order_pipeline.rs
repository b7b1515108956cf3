//! Order Fulfilment Pipeline
//!
//! This example walks orders through a fulfilment plan, rerouting failed
//! steps to recovery states.
//!
//! Key concepts:
//! - Order states (New -> Reserved -> Paid -> Shipped)
//! - Failure kinds selecting recovery triggers
//! - Named pipelines selected from a registry
//! - Checkpointing a walk and resuming it
//!
//! Run with: RUST_LOG=debug cargo run --example order_pipeline

use railyard::audit::{audit_pipeline, audit_table, findings};
use railyard::{
    fail, ActionResult, Checkpoint, Fsm, Movement, Pipeline, PipelineFsm, PipelineRegistry,
    State, StateHistory, Stateful, TableBuilder,
};
use railyard::{state_enum, trigger_enum};
use serde::{Deserialize, Serialize};
use thiserror::Error;

state_enum! {
    enum OrderState {
        New,
        Reserved,
        Paid,
        Shipped,
        OutOfStock,
        PaymentDeclined,
    }
    final: [Shipped, OutOfStock, PaymentDeclined]
    error: [OutOfStock, PaymentDeclined]
}

trigger_enum! {
    enum OrderEvent {
        Reserve,
        Pay,
        Ship,
        Backorder,
        Decline,
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Order {
    id: u64,
    total_cents: u64,
    in_stock: bool,
    card_valid: bool,
    notes: Vec<String>,
}

type Tracked = Stateful<OrderState, Order>;

#[derive(Debug, Error)]
#[error("order {0} has items out of stock")]
struct OutOfStockError(u64);

#[derive(Debug, Error)]
#[error("card declined for order {0}")]
struct CardDeclined(u64);

fn reserve(mut order: Tracked) -> ActionResult<Tracked> {
    if !order.data.in_stock {
        let id = order.data.id;
        return fail(order, OutOfStockError(id));
    }
    order.data.notes.push("stock reserved".to_string());
    Ok(order)
}

fn charge(mut order: Tracked) -> ActionResult<Tracked> {
    if !order.data.card_valid {
        let id = order.data.id;
        return fail(order, CardDeclined(id));
    }
    let note = format!("charged {} cents", order.data.total_cents);
    order.data.notes.push(note);
    Ok(order)
}

fn notify(mut order: Tracked) -> ActionResult<Tracked> {
    let note = format!("customer notified: {}", order.state.name());
    order.data.notes.push(note);
    Ok(order)
}

fn build_machine() -> Result<Fsm<OrderState, OrderEvent, Tracked>, railyard::BuildError> {
    TableBuilder::new()
        .add_movement(
            OrderState::New,
            OrderEvent::Reserve,
            Movement::to(OrderState::Reserved)
                .with_action(reserve)
                .recover_on::<OutOfStockError>(OrderEvent::Backorder),
        )?
        .add_movement(
            OrderState::New,
            OrderEvent::Backorder,
            Movement::to(OrderState::OutOfStock).with_post_action(notify),
        )?
        .add_movement(
            OrderState::Reserved,
            OrderEvent::Pay,
            Movement::to(OrderState::Paid)
                .with_action(charge)
                .recover_on::<CardDeclined>(OrderEvent::Decline),
        )?
        .add_movement(
            OrderState::Reserved,
            OrderEvent::Decline,
            Movement::to(OrderState::PaymentDeclined).with_post_action(notify),
        )?
        .add_movement(
            OrderState::Paid,
            OrderEvent::Ship,
            Movement::to(OrderState::Shipped).with_post_action(notify),
        )?
        .build_fsm()
}

fn fulfilment_plan() -> Result<Pipeline<OrderState, OrderEvent>, railyard::BuildError> {
    Pipeline::new()
        .add_pipe(OrderState::Reserved, OrderEvent::Pay)?
        .add_pipe(OrderState::Paid, OrderEvent::Ship)
}

fn order(id: u64, in_stock: bool, card_valid: bool) -> Tracked {
    Stateful::new(
        OrderState::New,
        Order {
            id,
            total_cents: 4_999,
            in_stock,
            card_valid,
            notes: Vec::new(),
        },
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== Order Fulfilment Pipeline ===\n");

    let fsm = build_machine()?;
    let plan = fulfilment_plan()?;

    // Audit ahead of time
    let table_audit = audit_table(fsm.table());
    let plan_audit = audit_pipeline(&plan, fsm.table());
    println!(
        "Audit: {} table findings, {} pipeline findings\n",
        findings(&table_audit).len(),
        findings(&plan_audit).len()
    );

    let registry = PipelineRegistry::new().register("fulfilment", plan)?;
    let machine = PipelineFsm::new(fsm, registry);

    for (label, tracked) in [
        ("happy path", order(1, true, true)),
        ("out of stock", order(2, false, true)),
        ("declined card", order(3, true, false)),
    ] {
        let done = machine.walk_on(OrderEvent::Reserve, tracked, &"fulfilment")?;
        println!("Order {} ({}): {}", done.data.id, label, done.state.name());
        for note in &done.data.notes {
            println!("  - {}", note);
        }
    }

    // Unknown pipeline ids are reported, not walked
    match machine.walk_on(OrderEvent::Reserve, order(4, true, true), &"express") {
        Ok(_) => println!("\nUnexpected walk on unknown pipeline"),
        Err(e) => println!("\nRejected: {}", e),
    }

    // Checkpoint after reservation and resume later
    let reserved = machine.fire(OrderEvent::Reserve, order(5, true, true))?;
    let json = Checkpoint::new(reserved, StateHistory::new())
        .on_pipeline("fulfilment")
        .to_json()?;
    println!("\nCheckpoint: {} bytes of JSON", json.len());

    let restored: Checkpoint<OrderState, Order> = Checkpoint::from_json(&json)?;
    let (holder, _history) = restored.resume();
    let plan = machine.registry().resolve(&"fulfilment")?;
    let shipped = machine.fsm().walk(holder, plan)?;
    println!(
        "Resumed order {}: {} (final: {})",
        shipped.data.id,
        shipped.state.name(),
        shipped.state.is_final()
    );

    // Shipped has no outbound movements
    if let Err(e) = machine.fire(OrderEvent::Ship, shipped) {
        println!("Cannot ship twice: {}", e);
        let order = e.into_holder();
        println!("Order {} stays {}", order.data.id, order.state.name());
    }
    Ok(())
}
