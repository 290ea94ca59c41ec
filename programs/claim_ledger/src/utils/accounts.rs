use anchor_lang::prelude::*;
use anchor_lang::system_program::{
    allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
};
use crate::constants::*;
use crate::error::*;
use crate::ledger::ClaimTarget;
use crate::state::*;

/// Address and bump of the claim account of (beneficiary, claim_id)
pub fn claim_address(ledger: &Pubkey, beneficiary: &Pubkey, claim_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            CLAIM_SEED.as_bytes(),
            ledger.as_ref(),
            beneficiary.as_ref(),
            &claim_id.to_le_bytes(),
        ],
        &crate::ID,
    )
}

/// Address and bump of the payout total account of (beneficiary, token)
pub fn payout_address(ledger: &Pubkey, beneficiary: &Pubkey, token: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            PAYOUT_SEED.as_bytes(),
            ledger.as_ref(),
            beneficiary.as_ref(),
            token.as_ref(),
        ],
        &crate::ID,
    )
}

fn is_initialized(info: &AccountInfo) -> bool {
    *info.owner == crate::ID && !info.data_is_empty()
}

fn read_account<T: AccountDeserialize>(info: &AccountInfo) -> Result<T> {
    let data = info.try_borrow_data()?;
    let mut slice: &[u8] = &data;
    T::try_deserialize(&mut slice)
}

fn write_account<T: AccountSerialize>(account: &T, info: &AccountInfo) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    account.try_serialize(&mut writer)
}

/**
 * Loads the claim accounts of one call into a claim store
 *
 * @param ledger - Ledger the claims belong to
 * @param targets - Claims the call works on, repeats allowed
 * @param accounts - `accounts[i]` is the claim account of `targets[i]`
 *
 * Account Rules:
 * - An existing claim account is checked against its seeds and stored bump
 * - A missing claim must be passed as its (empty) PDA and resolves to nothing
 * - Anything else fails with ClaimAccountMismatch
 */
pub fn load_claims(
    ledger: &Pubkey,
    targets: &[ClaimTarget],
    accounts: &[AccountInfo],
) -> Result<ClaimStore> {
    require!(
        targets.len() <= MAX_ENTRIES_PER_CALL,
        ClaimLedgerError::TooManyEntries
    );
    if accounts.len() != targets.len() {
        msg!("{} claim accounts for {} claims", accounts.len(), targets.len());
        return err!(ClaimLedgerError::ClaimAccountMismatch);
    }

    let mut store = ClaimStore::default();
    for (target, info) in targets.iter().zip(accounts) {
        if is_initialized(info) {
            let record: ClaimRecord = read_account(info)?;
            let id_bytes = target.claim_id.to_le_bytes();
            let address = Pubkey::create_program_address(
                &[
                    CLAIM_SEED.as_bytes(),
                    ledger.as_ref(),
                    target.beneficiary.as_ref(),
                    &id_bytes,
                    &[record.bump],
                ],
                &crate::ID,
            )
            .map_err(|_| error!(ClaimLedgerError::ClaimAccountMismatch))?;
            if info.key() != address {
                msg!("account {} is not claim {} of {}", info.key(), target.claim_id, target.beneficiary);
                return err!(ClaimLedgerError::ClaimAccountMismatch);
            }
            store.insert(record);
        } else {
            let (address, _) = claim_address(ledger, &target.beneficiary, target.claim_id);
            require_keys_eq!(info.key(), address, ClaimLedgerError::ClaimAccountMismatch);
        }
    }

    Ok(store)
}

/// Writes the records of `store` back to the accounts they were loaded from
pub fn store_claims(store: &ClaimStore, targets: &[ClaimTarget], accounts: &[AccountInfo]) -> Result<()> {
    for (target, info) in targets.iter().zip(accounts) {
        if let Some(record) = store.get(&target.beneficiary, target.claim_id) {
            if is_initialized(info) {
                write_account(record, info)?;
            }
        }
    }
    Ok(())
}

/**
 * Creates one claim account per record of a freshly filled store
 *
 * @param accounts - `accounts[i]` is the PDA of the i-th record, in id order
 * @param payer - Pays the rent of every new account
 */
pub fn create_claim_accounts<'info>(
    ledger: &Pubkey,
    store: &ClaimStore,
    accounts: &[AccountInfo<'info>],
    payer: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
) -> Result<()> {
    if accounts.len() != store.len() {
        msg!("{} claim accounts for {} new claims", accounts.len(), store.len());
        return err!(ClaimLedgerError::ClaimAccountMismatch);
    }

    for (record, info) in store.claims.iter().zip(accounts) {
        let (address, bump) = claim_address(ledger, &record.beneficiary, record.claim_id);
        require_keys_eq!(info.key(), address, ClaimLedgerError::ClaimAccountMismatch);

        let id_bytes = record.claim_id.to_le_bytes();
        let seeds: &[&[u8]] = &[
            CLAIM_SEED.as_bytes(),
            ledger.as_ref(),
            record.beneficiary.as_ref(),
            &id_bytes,
            &[bump],
        ];
        create_pda_account(payer, info, system_program, seeds, ClaimRecord::LEN)?;
        write_account(&ClaimRecord { bump, ..record.clone() }, info)?;
    }

    Ok(())
}

/// Creates a program-owned PDA, also when someone already sent lamports to
/// the address
fn create_pda_account<'info>(
    payer: &AccountInfo<'info>,
    new_account: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    seeds: &[&[u8]],
    space: usize,
) -> Result<()> {
    let lamports = Rent::get()?.minimum_balance(space);
    let signer = &[seeds];

    if new_account.lamports() == 0 {
        return create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: new_account.clone(),
                },
                signer,
            ),
            lamports,
            space as u64,
            &crate::ID,
        );
    }

    let top_up = lamports.saturating_sub(new_account.lamports());
    if top_up > 0 {
        transfer(
            CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: payer.clone(),
                    to: new_account.clone(),
                },
            ),
            top_up,
        )?;
    }
    allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: new_account.clone(),
            },
            signer,
        ),
        space as u64,
    )?;
    assign(
        CpiContext::new_with_signer(
            system_program.clone(),
            Assign {
                account_to_assign: new_account.clone(),
            },
            signer,
        ),
        &crate::ID,
    )
}

/// Payout total stored in `info`, `None` when the account was never created
pub fn load_payout_total(info: &AccountInfo) -> Result<Option<PayoutTotal>> {
    if !is_initialized(info) {
        return Ok(None);
    }
    read_account(info).map(Some)
}
