pub mod substrate_rpc;
