use sea_orm::sea_query::{Alias, Expr, Func, SimpleExpr};
use sea_orm::{
    EntityTrait, FromQueryResult, JoinType, PaginatorTrait, QueryOrder, QuerySelect, RelationTrait,
};
use uuid::Uuid;

use crate::{
    dto::stats::{MostRented, Stats},
    entity::{
        materials::{self, Column as MaterialCol, Entity as Materials},
        order_items::{Column as OrderItemCol, Entity as OrderItems},
        orders::{Column as OrderCol, Entity as Orders},
    },
    error::AppResult,
    money,
    response::{ApiResponse, Meta},
    state::AppState,
};

#[derive(Debug, FromQueryResult)]
struct MostRentedRow {
    id: Uuid,
    name: String,
    total_rented: i64,
}

pub async fn get_stats(state: &AppState) -> AppResult<ApiResponse<Stats>> {
    let total_materials = Materials::find().count(&state.orm).await?;
    let total_orders = Orders::find().count(&state.orm).await?;

    // SUM(bigint) is NUMERIC on Postgres, cast back so both backends decode an i64
    let revenue: Option<i64> = Orders::find()
        .select_only()
        .column_as(
            SimpleExpr::from(Func::cast_as(
                Func::sum(Expr::col(OrderCol::TotalPrice)),
                Alias::new("BIGINT"),
            )),
            "revenue",
        )
        .into_tuple::<Option<i64>>()
        .one(&state.orm)
        .await?
        .flatten();

    // Ties between materials with the same rented quantity are left to the database.
    let rented_quantity =
        SimpleExpr::from(Func::sum(Expr::col((OrderItems, OrderItemCol::Quantity))));
    let most_rented = Materials::find()
        .select_only()
        .column(MaterialCol::Id)
        .column(MaterialCol::Name)
        .column_as(
            SimpleExpr::from(Func::cast_as(rented_quantity.clone(), Alias::new("BIGINT"))),
            "total_rented",
        )
        .join(JoinType::InnerJoin, materials::Relation::OrderItems.def())
        .group_by(MaterialCol::Id)
        .group_by(MaterialCol::Name)
        .order_by(rented_quantity, sea_orm::Order::Desc)
        .into_model::<MostRentedRow>()
        .one(&state.orm)
        .await?
        .map(|row| MostRented {
            material_id: row.id,
            name: row.name,
            total_rented: row.total_rented,
        });

    let stats = Stats {
        total_materials,
        total_orders,
        total_revenue: money::to_decimal(revenue.unwrap_or(0)),
        most_rented,
    };
    Ok(ApiResponse::success("Statistics", stats, Some(Meta::empty())))
}
