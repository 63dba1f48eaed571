//! Flash swap walkthrough.
//!
//! Seeds a pair, runs one flash swap that repays with a premium and one
//! that repays at par, and shows that only the first one lands.
//!
//! Run with `RUST_LOG=hydra_pair=debug cargo run --example flash_swap` to
//! see the transition log.

use hydra_pair::prelude::*;
use tracing_subscriber::EnvFilter;

/// Repays each borrowed token plus `premium_bps` basis points, rounded up.
struct Arbitrageur {
    premium_bps: u128,
}

impl Arbitrageur {
    fn repayment(&self, borrowed: Amount) -> Amount {
        let premium = (borrowed.get() * self.premium_bps).div_ceil(10_000);
        Amount::new(borrowed.get() + premium)
    }
}

impl FlashSwapCallee for Arbitrageur {
    fn on_flash_swap(&mut self, handle: &mut FlashSwapHandle<'_>) -> Result<()> {
        let session = *handle.session();
        println!(
            "  callback: session {} holds {} / {} (phase {})",
            session.id,
            session.amount0_out,
            session.amount1_out,
            handle.pair().phase()
        );
        handle.repay(
            self.repayment(session.amount0_out),
            self.repayment(session.amount1_out),
        )
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let tokens = TokenPair::new(
        TokenAddress::from_bytes([0x0a; 32]),
        TokenAddress::from_bytes([0x0b; 32]),
    )?;
    let mut pair = Pair::from_config(&PairConfig::new(tokens))?;

    let provider = AccountId::from_bytes([0x01; 32]);
    let minted = pair.mint(provider, Amount::new(1_000_000), Amount::new(4_000_000))?;
    println!(
        "seeded: {} shares to provider, {} locked, reserves {:?}",
        minted.liquidity,
        minted.locked,
        pair.reserves()
    );

    // 50 bps on the borrowed side clears the 30 bps fee.
    let mut ctx = ExecutionContext::open(&mut pair);
    let outcome = ctx.flash_swap(
        Amount::new(10_000),
        Amount::ZERO,
        &mut Arbitrageur { premium_bps: 50 },
    )?;
    ctx.commit()?;
    println!(
        "verified: paid in {} token0, reserves now ({}, {})",
        outcome.amount0_in, outcome.reserve0, outcome.reserve1
    );

    // Repaying at par leaves no input for the fee; the context restores.
    let before = pair.reserves();
    let mut ctx = ExecutionContext::open(&mut pair);
    match ctx.flash_swap(
        Amount::ZERO,
        Amount::new(40_000),
        &mut Arbitrageur { premium_bps: 0 },
    ) {
        Ok(_) => println!("unexpected: par repayment was admitted"),
        Err(err) => println!("rejected: {err}"),
    }
    ctx.abandon();
    assert_eq!(pair.reserves(), before);

    if let Err(breach) = check_invariants(&pair) {
        println!("invariant breach: {breach}");
    }
    println!("final reserves {:?}, supply {}", pair.reserves(), pair.total_supply());
    Ok(())
}
