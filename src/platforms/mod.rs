pub mod oreilly;
