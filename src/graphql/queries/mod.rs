use async_graphql::*;

use crate::errors::ResultExt;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::Group;

pub struct Query;

#[Object]
impl Query {
    /// Get all groups
    async fn all_groups(&self, ctx: &Context<'_>) -> Result<Vec<Group>> {
        let context = ctx.data::<GraphQLContext>()?;
        let groups = context.groups.all_groups().await.to_graphql_result()?;

        Ok(groups.into_iter().map(Group::from).collect())
    }

    /// Get a specific group by ID
    async fn find_group(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Group>> {
        let context = ctx.data::<GraphQLContext>()?;
        let group = context.groups.find_group(&id).await.to_graphql_result()?;

        Ok(group.map(Group::from))
    }
}
