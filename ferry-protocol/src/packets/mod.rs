/// Bedrock Edition packets (client connection).
pub mod bedrock;
/// Java Edition packets (server connection).
pub mod java;
