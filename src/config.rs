use std::time::Duration;

/// GraphQL endpoint of a locally running indexer.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:42069/graphql";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Token list query. Filters by chain, orders by a caller-chosen column
/// (newest/largest first) and caps the page size.
pub const GET_TOKENS: &str = r#"
query Tokens($chainId: Int!, $orderBy: String!, $limit: Int!) {
  tokens(
    where: { chainId: $chainId }
    orderBy: $orderBy
    orderDirection: "desc"
    limit: $limit
  ) {
    items {
      id
      address
      chainId
      creator
      name
      symbol
      marketCap
      description
      logoUrl
      timestamp
    }
  }
}
"#;

/// Single-token detail query, including the full price-bar history in
/// bucket order.
pub const GET_TOKEN: &str = r#"
query Token($id: String!) {
  token(id: $id) {
    id
    address
    chainId
    creator
    name
    symbol
    marketCap
    description
    logoUrl
    timestamp
    isMigrated
    lpAddress
    prices(orderBy: "id", orderDirection: "asc") {
      items {
        id
        open
        high
        low
        close
        average
        count
      }
    }
  }
}
"#;
