pub mod purge_listing_cache;
