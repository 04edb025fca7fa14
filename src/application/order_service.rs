use std::time::Duration;

use crate::domain::basket::{RequestedItem, ValidatedBasket};
use crate::domain::errors::PlaceOrderError;
use crate::domain::order::{PlacedOrder, ReservedLine};
use crate::domain::ports::{ReservationStore, ReservationTx};
use crate::domain::vat;

/// Order placement: validate the basket, then reserve every line inside a
/// single storage transaction, total the lines and persist the order.
pub struct OrderService<S> {
    store: S,
}

impl<S: ReservationStore> OrderService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Place an order for `items`, bounded end to end by `deadline`.
    ///
    /// Lines are reserved strictly in request order: for each line the
    /// item's stock row is locked, availability checked, stock decremented
    /// and the price/VAT captured from the locked snapshot. The order header
    /// and its lines are written in the same transaction, so either the
    /// whole order commits or nothing of it is ever visible. Rejections and
    /// storage failures roll the transaction back; malformed baskets are
    /// rejected before a transaction is opened at all.
    pub fn place_order(
        &self,
        deadline: Duration,
        items: Vec<RequestedItem>,
    ) -> Result<PlacedOrder, PlaceOrderError> {
        let basket = ValidatedBasket::validate(items)?;

        self.store.transaction(deadline, |tx| {
            let mut lines = Vec::with_capacity(basket.items().len());

            for requested in basket.items() {
                let stock = tx.lock_and_read_stock(requested.item_id)?.ok_or(
                    PlaceOrderError::ItemNotFound {
                        item_id: requested.item_id,
                    },
                )?;

                if stock.quantity_in_stock < requested.quantity {
                    return Err(PlaceOrderError::InsufficientStock {
                        item_id: requested.item_id,
                    });
                }

                tx.decrement_stock(requested.item_id, requested.quantity)?;

                lines.push(ReservedLine {
                    item_id: requested.item_id,
                    price_cents: stock.price_cents,
                    vat_cents: vat::vat_amount_cents(stock.price_cents, stock.vat_rate),
                    quantity: requested.quantity,
                });
            }

            let total_price_cents = lines
                .iter()
                .map(|l| l.price_cents * i64::from(l.quantity))
                .sum();
            let total_vat_cents = lines
                .iter()
                .map(|l| l.vat_cents * i64::from(l.quantity))
                .sum();

            let order_id = tx.insert_order()?;
            for line in &lines {
                tx.insert_order_line(order_id, line)?;
            }

            Ok(PlacedOrder {
                id: order_id,
                total_price_cents,
                total_vat_cents,
                items: lines,
            })
        })
    }
}
