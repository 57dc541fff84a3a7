#![no_std]

//! # Guess The Number
//!
//! A single-round number-guessing wager settled in one Soroban token.
//!
//! ## Round flow
//! 1. The owner (optionally) delegates the guess-master role for one round.
//! 2. The guess master commits a secret number in `[1, 100]`.
//! 3. Players pay a bet in `[min_bet, max_bet]` to guess, or pay exactly the
//!    current pool to receive a higher/lower hint. Both consume an attempt.
//! 4. A correct guess (direct or through a hint) pays the whole pool to the
//!    player. Reaching `max_attempts` pays the whole pool to the guess master.
//! 5. Either way the round is wiped and the guess-master role returns to the
//!    owner. Anyone may `fund` the pool at any time.
//!
//! ## Settlement ordering
//! Every gameplay call runs checks, then bookkeeping (including the full round
//! reset), and only then the outgoing transfer. A payout the recipient rejects
//! surfaces as `TransferFailed`, and the host rolls back the whole call.

use soroban_sdk::{
    contract, contractclient, contracterror, contractevent, contractimpl, contracttype, log,
    Address, BytesN, Env, Vec,
};

// ═══════════════════════════════════════════════════════════════════════════════
//  Contract Events
// ═══════════════════════════════════════════════════════════════════════════════

#[contractevent]
pub struct EvGuessMasterAssigned {
    pub previous: Address,
    pub new_master: Address,
}

#[contractevent]
pub struct EvConfigUpdated {
    pub min_bet: i128,
    pub max_bet: i128,
    pub max_attempts: u32,
    pub max_hints: u32,
}

/// Emitted when a round opens. The number itself is never published.
#[contractevent]
pub struct EvSecretCommitted {
    pub guess_master: Address,
}

#[contractevent]
pub struct EvPoolFunded {
    pub from: Address,
    pub amount: i128,
    pub pool: i128,
}

#[contractevent]
pub struct EvGuessMade {
    pub player: Address,
    pub value: u32,
    pub correct: bool,
}

#[contractevent]
pub struct EvHintUsed {
    pub player: Address,
    pub value: u32,
    pub is_secret_higher: bool,
}

#[contractevent]
pub struct EvRoundEnded {
    pub recipient: Address,
    pub payout: i128,
    pub cause: u32, // OUTCOME_WIN or OUTCOME_EXHAUSTED
}

// ═══════════════════════════════════════════════════════════════════════════════
//  External trait interfaces
// ═══════════════════════════════════════════════════════════════════════════════

/// The slice of the token interface used for settlement. Any SEP-41 token,
/// including a Stellar Asset Contract, satisfies it.
#[contractclient(name = "SettlementTokenClient")]
pub trait SettlementToken {
    fn balance(env: Env, id: Address) -> i128;
    fn transfer(env: Env, from: Address, to: Address, amount: i128);
}

// ═══════════════════════════════════════════════════════════════════════════════
//  Errors
// ═══════════════════════════════════════════════════════════════════════════════

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum GuessError {
    Unauthorized = 1,
    InvalidTarget = 2,
    OutOfRange = 3,
    BetOutOfBounds = 4,
    WrongHintPayment = 5,
    RoundNotActive = 6,
    RoleConflict = 7,
    HintsExhausted = 8,
    PoolEmpty = 9,
    TransferFailed = 10,
    Overflow = 11,
    NotInitialized = 12,
}

// ═══════════════════════════════════════════════════════════════════════════════
//  Outcome codes
// ═══════════════════════════════════════════════════════════════════════════════

pub(crate) type Outcome = u32;

pub const OUTCOME_CONTINUES: Outcome = 0;
pub const OUTCOME_WIN: Outcome = 1;
pub const OUTCOME_EXHAUSTED: Outcome = 2;

// ═══════════════════════════════════════════════════════════════════════════════
//  State & storage keys
// ═══════════════════════════════════════════════════════════════════════════════

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameConfig {
    pub min_bet: i128,
    pub max_bet: i128,
    pub max_attempts: u32,
    pub max_hints: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundState {
    pub secret_set: bool,
    pub secret: u32,
    pub total_attempts: u32,
    pub used_hints: u32,
}

/// Per-round participation record. Deleted when the round ends.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PlayerRecord {
    pub attempts: u32,
    pub hints_used: u32,
    pub last_bet: i128,
}

/// `is_secret_higher` carries no information when `outcome` is `OUTCOME_WIN`:
/// the hinted value was the secret and is reported as `false`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HintReply {
    pub is_secret_higher: bool,
    pub outcome: u32,
}

/// Read-only snapshot for presentation layers.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameStatus {
    pub owner: Address,
    pub guess_master: Address,
    pub last_assigned_guess_master: Address,
    pub secret_set: bool,
    pub total_attempts: u32,
    pub max_attempts: u32,
    pub remaining_attempts: u32,
    pub used_hints: u32,
    pub max_hints: u32,
    pub remaining_hints: u32,
    pub pool: i128,
    pub hint_cost: i128,
    pub min_bet: i128,
    pub max_bet: i128,
    pub total_players: u32,
}

#[contracttype]
#[derive(Clone)]
enum DataKey {
    Owner,
    Token,
    GuessMaster,
    LastAssignedGuessMaster,
    Config,
    Round,
    /// Insertion-ordered addresses that played this round
    Players,
    /// DataKey::Player(address) → PlayerRecord, persistent storage
    Player(Address),
}

// ═══════════════════════════════════════════════════════════════════════════════
//  Constants
// ═══════════════════════════════════════════════════════════════════════════════

pub const MIN_NUMBER: u32 = 1;
pub const MAX_NUMBER: u32 = 100;

pub const MAX_ATTEMPTS_LIMIT: u32 = 100;
pub const MAX_HINTS_LIMIT: u32 = 10;

// Token amounts use 7 decimals: 0.001 and 1000 whole units.
pub const DEFAULT_MIN_BET: i128 = 10_000;
pub const DEFAULT_MAX_BET: i128 = 10_000_000_000;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;
pub const DEFAULT_MAX_HINTS: u32 = 3;

// Ledger rate is approximately 5 seconds per ledger on Stellar
const LEDGER_RATE_SECS: u32 = 5;

// TTL expressed in human-readable time units (30 days)
const TTL_SECONDS: u32 = 30 * 24 * 60 * 60;

/// TTL for round storage in ledgers: 30 * 24 * 60 * 60 / 5 = 518,400 ledgers
const ROUND_TTL_LEDGERS: u32 = TTL_SECONDS / LEDGER_RATE_SECS;

// ═══════════════════════════════════════════════════════════════════════════════
//  Contract
// ═══════════════════════════════════════════════════════════════════════════════

#[contract]
pub struct GuessTheNumber;

#[contractimpl]
impl GuessTheNumber {
    // ───────────────────────────────────────────────────────────────────────────
    //  Public: Constructor & Role Administration
    // ───────────────────────────────────────────────────────────────────────────

    /// `owner` is permanent and starts out as the guess master. `token` is the
    /// settlement asset for bets, hint fees, funding and payouts.
    pub fn __constructor(env: Env, owner: Address, token: Address) {
        let storage = env.storage().instance();
        storage.set(&DataKey::Owner, &owner);
        storage.set(&DataKey::Token, &token);
        storage.set(&DataKey::GuessMaster, &owner);
        storage.set(&DataKey::LastAssignedGuessMaster, &owner);
        storage.set(
            &DataKey::Config,
            &GameConfig {
                min_bet: DEFAULT_MIN_BET,
                max_bet: DEFAULT_MAX_BET,
                max_attempts: DEFAULT_MAX_ATTEMPTS,
                max_hints: DEFAULT_MAX_HINTS,
            },
        );
        storage.set(&DataKey::Round, &Self::empty_round());
        storage.set(&DataKey::Players, &Vec::<Address>::new(&env));
    }

    /// Hand the guess-master role to `new_master`. The delegation lasts until
    /// the next round ends, after which the role returns to the owner.
    pub fn assign_guess_master(
        env: Env,
        caller: Address,
        new_master: Address,
    ) -> Result<(), GuessError> {
        Self::require_owner(&env, &caller)?;

        let current = Self::load_guess_master(&env)?;
        if new_master == current || new_master == env.current_contract_address() {
            return Err(GuessError::InvalidTarget);
        }

        let storage = env.storage().instance();
        storage.set(&DataKey::GuessMaster, &new_master);
        storage.set(&DataKey::LastAssignedGuessMaster, &new_master);
        Self::bump_instance(&env);

        EvGuessMasterAssigned {
            previous: current,
            new_master,
        }.publish(&env);
        Ok(())
    }

    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), GuessError> {
        let owner = Self::load_owner(&env)?;
        owner.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────────────────
    //  Public: Round Configuration
    // ───────────────────────────────────────────────────────────────────────────

    pub fn set_bet_bounds(
        env: Env,
        caller: Address,
        min_bet: i128,
        max_bet: i128,
    ) -> Result<(), GuessError> {
        Self::require_owner(&env, &caller)?;
        let mut config = Self::read_config(&env)?;
        config.min_bet = min_bet;
        config.max_bet = max_bet;
        Self::write_config(&env, &config)
    }

    pub fn set_min_bet(env: Env, caller: Address, min_bet: i128) -> Result<(), GuessError> {
        Self::require_owner(&env, &caller)?;
        let mut config = Self::read_config(&env)?;
        config.min_bet = min_bet;
        Self::write_config(&env, &config)
    }

    pub fn set_max_bet(env: Env, caller: Address, max_bet: i128) -> Result<(), GuessError> {
        Self::require_owner(&env, &caller)?;
        let mut config = Self::read_config(&env)?;
        config.max_bet = max_bet;
        Self::write_config(&env, &config)
    }

    /// While a round is running the new limit must stay above the attempts
    /// already spent, otherwise the round could never reach its limit.
    pub fn set_max_attempts(env: Env, caller: Address, max_attempts: u32) -> Result<(), GuessError> {
        Self::require_owner(&env, &caller)?;
        let round = Self::read_round(&env)?;
        if round.secret_set && max_attempts <= round.total_attempts {
            return Err(GuessError::OutOfRange);
        }
        let mut config = Self::read_config(&env)?;
        config.max_attempts = max_attempts;
        Self::write_config(&env, &config)
    }

    pub fn set_max_hints_per_game(
        env: Env,
        caller: Address,
        max_hints: u32,
    ) -> Result<(), GuessError> {
        Self::require_owner(&env, &caller)?;
        let round = Self::read_round(&env)?;
        if max_hints < round.used_hints {
            return Err(GuessError::OutOfRange);
        }
        let mut config = Self::read_config(&env)?;
        config.max_hints = max_hints;
        Self::write_config(&env, &config)
    }

    // ───────────────────────────────────────────────────────────────────────────
    //  Public: Round Lifecycle
    // ───────────────────────────────────────────────────────────────────────────

    /// Open a round with `number` as the secret. Re-committing during a round
    /// wipes its attempts and hints. The pool always carries over.
    pub fn commit_secret(env: Env, caller: Address, number: u32) -> Result<(), GuessError> {
        caller.require_auth();
        let guess_master = Self::load_guess_master(&env)?;
        if caller != guess_master {
            return Err(GuessError::Unauthorized);
        }
        Self::require_number(number)?;

        Self::clear_players(&env);
        let round = RoundState {
            secret_set: true,
            secret: number,
            total_attempts: 0,
            used_hints: 0,
        };
        Self::write_round(&env, &round);

        EvSecretCommitted { guess_master }.publish(&env);
        Ok(())
    }

    /// Anyone may add to the pool, with or without a round in progress.
    /// Returns the pool after the deposit.
    pub fn fund(env: Env, from: Address, amount: i128) -> Result<i128, GuessError> {
        from.require_auth();
        if amount <= 0 {
            return Err(GuessError::OutOfRange);
        }

        Self::collect(&env, &from, amount)?;
        let pool = Self::read_pool(&env)?;
        Self::bump_instance(&env);

        EvPoolFunded { from, amount, pool }.publish(&env);
        Ok(pool)
    }

    // ───────────────────────────────────────────────────────────────────────────
    //  Public: Gameplay
    // ───────────────────────────────────────────────────────────────────────────

    /// Bet `payment` that the secret equals `value`.
    ///
    /// Returns `OUTCOME_WIN` when the guess is correct (the caller receives the
    /// whole pool), `OUTCOME_EXHAUSTED` when this call used the last attempt
    /// (the guess master receives the whole pool), `OUTCOME_CONTINUES` otherwise.
    pub fn guess(
        env: Env,
        player: Address,
        value: u32,
        payment: i128,
    ) -> Result<u32, GuessError> {
        player.require_auth();

        let mut round = Self::read_round(&env)?;
        let guess_master = Self::require_player(&env, &round, &player)?;
        Self::require_number(value)?;
        let config = Self::read_config(&env)?;
        if payment < config.min_bet || payment > config.max_bet {
            return Err(GuessError::BetOutOfBounds);
        }

        Self::collect(&env, &player, payment)?;
        let pool = Self::read_pool(&env)?;

        let mut record = Self::enter_player(&env, &player);
        record.attempts = record.attempts.checked_add(1).ok_or(GuessError::Overflow)?;
        record.last_bet = payment;
        round.total_attempts = round.total_attempts.checked_add(1).ok_or(GuessError::Overflow)?;

        let correct = value == round.secret;
        EvGuessMade {
            player: player.clone(),
            value,
            correct,
        }.publish(&env);

        if correct {
            return Self::finish_round(&env, &player, pool, OUTCOME_WIN);
        }
        if round.total_attempts >= config.max_attempts {
            return Self::finish_round(&env, &guess_master, pool, OUTCOME_EXHAUSTED);
        }

        Self::write_player(&env, &player, &record);
        Self::write_round(&env, &round);
        Ok(OUTCOME_CONTINUES)
    }

    /// Pay exactly the current pool to learn whether the secret is above
    /// `value`. The hint consumes an attempt, and a hint on the secret itself
    /// wins the doubled pool.
    pub fn request_hint(
        env: Env,
        player: Address,
        value: u32,
        payment: i128,
    ) -> Result<HintReply, GuessError> {
        player.require_auth();

        let mut round = Self::read_round(&env)?;
        let guess_master = Self::require_player(&env, &round, &player)?;
        Self::require_number(value)?;
        let config = Self::read_config(&env)?;
        if round.used_hints >= config.max_hints {
            return Err(GuessError::HintsExhausted);
        }
        let hint_cost = Self::read_pool(&env)?;
        if hint_cost <= 0 {
            return Err(GuessError::PoolEmpty);
        }
        if payment != hint_cost {
            return Err(GuessError::WrongHintPayment);
        }

        Self::collect(&env, &player, payment)?;
        let pool = Self::read_pool(&env)?;

        let mut record = Self::enter_player(&env, &player);
        record.attempts = record.attempts.checked_add(1).ok_or(GuessError::Overflow)?;
        record.hints_used = record.hints_used.checked_add(1).ok_or(GuessError::Overflow)?;
        round.total_attempts = round.total_attempts.checked_add(1).ok_or(GuessError::Overflow)?;
        round.used_hints = round.used_hints.checked_add(1).ok_or(GuessError::Overflow)?;

        let is_secret_higher = round.secret > value;
        EvHintUsed {
            player: player.clone(),
            value,
            is_secret_higher,
        }.publish(&env);

        if value == round.secret {
            let outcome = Self::finish_round(&env, &player, pool, OUTCOME_WIN)?;
            return Ok(HintReply {
                is_secret_higher,
                outcome,
            });
        }

        if round.total_attempts >= config.max_attempts {
            let outcome = Self::finish_round(&env, &guess_master, pool, OUTCOME_EXHAUSTED)?;
            return Ok(HintReply {
                is_secret_higher,
                outcome,
            });
        }

        Self::write_player(&env, &player, &record);
        Self::write_round(&env, &round);
        Ok(HintReply {
            is_secret_higher,
            outcome: OUTCOME_CONTINUES,
        })
    }

    // ───────────────────────────────────────────────────────────────────────────
    //  Public: Queries
    // ───────────────────────────────────────────────────────────────────────────

    pub fn get_owner(env: Env) -> Result<Address, GuessError> {
        Self::load_owner(&env)
    }

    pub fn get_guess_master(env: Env) -> Result<Address, GuessError> {
        Self::load_guess_master(&env)
    }

    pub fn get_last_assigned_guess_master(env: Env) -> Result<Address, GuessError> {
        Self::load_last_assigned(&env)
    }

    pub fn get_token(env: Env) -> Result<Address, GuessError> {
        Self::load_token(&env)
    }

    pub fn get_config(env: Env) -> Result<GameConfig, GuessError> {
        Self::read_config(&env)
    }

    pub fn is_secret_set(env: Env) -> Result<bool, GuessError> {
        Ok(Self::read_round(&env)?.secret_set)
    }

    /// Everything the contract holds in the settlement token, including
    /// tokens sent to it outside `fund`.
    pub fn get_pool(env: Env) -> Result<i128, GuessError> {
        Self::read_pool(&env)
    }

    /// A hint always costs the whole current pool.
    pub fn get_hint_cost(env: Env) -> Result<i128, GuessError> {
        Self::read_pool(&env)
    }

    pub fn get_status(env: Env) -> Result<GameStatus, GuessError> {
        let config = Self::read_config(&env)?;
        let round = Self::read_round(&env)?;
        let pool = Self::read_pool(&env)?;
        Ok(GameStatus {
            owner: Self::load_owner(&env)?,
            guess_master: Self::load_guess_master(&env)?,
            last_assigned_guess_master: Self::load_last_assigned(&env)?,
            secret_set: round.secret_set,
            total_attempts: round.total_attempts,
            max_attempts: config.max_attempts,
            remaining_attempts: config.max_attempts.saturating_sub(round.total_attempts),
            used_hints: round.used_hints,
            max_hints: config.max_hints,
            remaining_hints: config.max_hints.saturating_sub(round.used_hints),
            pool,
            hint_cost: pool,
            min_bet: config.min_bet,
            max_bet: config.max_bet,
            total_players: Self::read_players(&env).len(),
        })
    }

    /// Zeroed record for addresses that have not played this round.
    pub fn get_player(env: Env, player: Address) -> PlayerRecord {
        Self::read_player(&env, &player).unwrap_or_default()
    }

    pub fn get_total_players(env: Env) -> u32 {
        Self::read_players(&env).len()
    }

    pub fn get_player_at(env: Env, index: u32) -> Result<Address, GuessError> {
        Self::read_players(&env)
            .get(index)
            .ok_or(GuessError::OutOfRange)
    }

    pub fn get_players(env: Env) -> Vec<Address> {
        Self::read_players(&env)
    }

    /// The committed number, visible to the current guess master only.
    pub fn get_secret(env: Env, caller: Address) -> Result<Option<u32>, GuessError> {
        caller.require_auth();
        if caller != Self::load_guess_master(&env)? {
            return Err(GuessError::Unauthorized);
        }
        let round = Self::read_round(&env)?;
        Ok(if round.secret_set { Some(round.secret) } else { None })
    }

    // ═══════════════════════════════════════════════════════════════════════════
    //  Internal: Termination (single payout call-site)
    // ═══════════════════════════════════════════════════════════════════════════

    /// Wipe the round, hand the role back to the owner, and only then pay
    /// `payout` (the whole pool) to `recipient`.
    fn finish_round(
        env: &Env,
        recipient: &Address,
        payout: i128,
        cause: Outcome,
    ) -> Result<Outcome, GuessError> {
        let owner = Self::load_owner(env)?;

        Self::clear_players(env);
        Self::write_round(env, &Self::empty_round());
        env.storage().instance().set(&DataKey::GuessMaster, &owner);

        EvRoundEnded {
            recipient: recipient.clone(),
            payout,
            cause,
        }.publish(env);
        log!(env, "round ended: cause {}, payout {}", cause, payout);

        Self::disburse(env, recipient, payout)?;
        Ok(cause)
    }

    fn empty_round() -> RoundState {
        RoundState {
            secret_set: false,
            secret: 0,
            total_attempts: 0,
            used_hints: 0,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    //  Internal: Guards
    // ═══════════════════════════════════════════════════════════════════════════

    fn require_owner(env: &Env, caller: &Address) -> Result<(), GuessError> {
        caller.require_auth();
        if *caller != Self::load_owner(env)? {
            return Err(GuessError::Unauthorized);
        }
        Ok(())
    }

    /// Returns the guess master so callers can pay them on exhaustion.
    fn require_player(
        env: &Env,
        round: &RoundState,
        player: &Address,
    ) -> Result<Address, GuessError> {
        if !round.secret_set {
            return Err(GuessError::RoundNotActive);
        }
        let guess_master = Self::load_guess_master(env)?;
        if *player == guess_master {
            return Err(GuessError::RoleConflict);
        }
        Ok(guess_master)
    }

    fn require_number(value: u32) -> Result<(), GuessError> {
        if !(MIN_NUMBER..=MAX_NUMBER).contains(&value) {
            return Err(GuessError::OutOfRange);
        }
        Ok(())
    }

    fn validate_config(config: &GameConfig) -> Result<(), GuessError> {
        if config.min_bet <= 0 || config.min_bet > config.max_bet {
            return Err(GuessError::OutOfRange);
        }
        if !(1..=MAX_ATTEMPTS_LIMIT).contains(&config.max_attempts) {
            return Err(GuessError::OutOfRange);
        }
        if !(1..=MAX_HINTS_LIMIT).contains(&config.max_hints) {
            return Err(GuessError::OutOfRange);
        }
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════════
    //  Internal: Token movement
    // ═══════════════════════════════════════════════════════════════════════════

    fn collect(env: &Env, from: &Address, amount: i128) -> Result<(), GuessError> {
        let token = SettlementTokenClient::new(env, &Self::load_token(env)?);
        match token.try_transfer(from, &env.current_contract_address(), &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(GuessError::TransferFailed),
        }
    }

    fn disburse(env: &Env, to: &Address, amount: i128) -> Result<(), GuessError> {
        let token = SettlementTokenClient::new(env, &Self::load_token(env)?);
        match token.try_transfer(&env.current_contract_address(), to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(GuessError::TransferFailed),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    //  Internal: Storage
    // ═══════════════════════════════════════════════════════════════════════════

    /// Registers `player` for this round on first contact and returns their
    /// current record.
    fn enter_player(env: &Env, player: &Address) -> PlayerRecord {
        if let Some(record) = Self::read_player(env, player) {
            return record;
        }
        // No record means no entry in the registry yet
        let mut players = Self::read_players(env);
        players.push_back(player.clone());
        env.storage().instance().set(&DataKey::Players, &players);
        PlayerRecord::default()
    }

    /// Delete every participant's record and empty the registry.
    fn clear_players(env: &Env) {
        let players = Self::read_players(env);
        for player in players.iter() {
            env.storage().persistent().remove(&DataKey::Player(player));
        }
        env.storage()
            .instance()
            .set(&DataKey::Players, &Vec::<Address>::new(env));
    }

    fn read_players(env: &Env) -> Vec<Address> {
        env.storage()
            .instance()
            .get(&DataKey::Players)
            .unwrap_or_else(|| Vec::new(env))
    }

    fn read_player(env: &Env, player: &Address) -> Option<PlayerRecord> {
        env.storage()
            .persistent()
            .get(&DataKey::Player(player.clone()))
    }

    fn write_player(env: &Env, player: &Address, record: &PlayerRecord) {
        let key = DataKey::Player(player.clone());
        env.storage().persistent().set(&key, record);
        env.storage()
            .persistent()
            .extend_ttl(&key, ROUND_TTL_LEDGERS, ROUND_TTL_LEDGERS);
    }

    fn read_round(env: &Env) -> Result<RoundState, GuessError> {
        env.storage()
            .instance()
            .get(&DataKey::Round)
            .ok_or(GuessError::NotInitialized)
    }

    fn write_round(env: &Env, round: &RoundState) {
        env.storage().instance().set(&DataKey::Round, round);
        Self::bump_instance(env);
    }

    /// The pool is the contract's own token balance, so direct transfers to
    /// the contract join it.
    fn read_pool(env: &Env) -> Result<i128, GuessError> {
        let token = SettlementTokenClient::new(env, &Self::load_token(env)?);
        Ok(token.balance(&env.current_contract_address()))
    }

    fn read_config(env: &Env) -> Result<GameConfig, GuessError> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(GuessError::NotInitialized)
    }

    fn write_config(env: &Env, config: &GameConfig) -> Result<(), GuessError> {
        Self::validate_config(config)?;
        env.storage().instance().set(&DataKey::Config, config);
        Self::bump_instance(env);

        EvConfigUpdated {
            min_bet: config.min_bet,
            max_bet: config.max_bet,
            max_attempts: config.max_attempts,
            max_hints: config.max_hints,
        }.publish(env);
        Ok(())
    }

    // Keep instance storage (roles, config, round, registry) alive
    fn bump_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(ROUND_TTL_LEDGERS, ROUND_TTL_LEDGERS);
    }

    fn load_owner(env: &Env) -> Result<Address, GuessError> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(GuessError::NotInitialized)
    }

    fn load_guess_master(env: &Env) -> Result<Address, GuessError> {
        env.storage()
            .instance()
            .get(&DataKey::GuessMaster)
            .ok_or(GuessError::NotInitialized)
    }

    fn load_last_assigned(env: &Env) -> Result<Address, GuessError> {
        env.storage()
            .instance()
            .get(&DataKey::LastAssignedGuessMaster)
            .ok_or(GuessError::NotInitialized)
    }

    fn load_token(env: &Env) -> Result<Address, GuessError> {
        env.storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(GuessError::NotInitialized)
    }
}
