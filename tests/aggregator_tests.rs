use ledger_lens::aggregator::{
    aggregate, analyze, build_wallets, ranked_by_balance, AnalysisOptions, MissingAmountPolicy,
    WalletRole,
};
use ledger_lens::ledger::{resolve_schema, LedgerSnapshot};
use ledger_lens::utils::config::MAX_HISTOGRAM_BINS;
use pretty_assertions::assert_eq;

fn snapshot(csv_text: &str) -> LedgerSnapshot {
    LedgerSnapshot::from_csv_str(csv_text).unwrap()
}

#[test]
fn test_two_wallet_round_trip_scenario() {
    let ledger = snapshot("from,to,amount\nA,B,100\nB,A,40\n");

    let analysis = analyze(&ledger, &AnalysisOptions::new());

    let a = &analysis.wallets["A"];
    assert_eq!((a.sent, a.received, a.balance), (100.0, 40.0, -60.0));
    assert_eq!(a.role, WalletRole::NetSender);

    let b = &analysis.wallets["B"];
    assert_eq!((b.sent, b.received, b.balance), (40.0, 100.0, 60.0));
    assert_eq!(b.role, WalletRole::NetRecipient);

    assert_eq!(analysis.metrics.transaction_count, 2);
    assert_eq!(analysis.metrics.total_volume, Some(140.0));
    assert_eq!(analysis.metrics.average_amount, Some(70.0));
    assert_eq!(analysis.metrics.unique_wallet_count, 2);
}

#[test]
fn test_balances_sum_to_zero() {
    let ledger = snapshot(
        "Tx Hash,From,To,Amount\n\
         0x01,Mint,Alice,1000\n\
         0x02,Alice,Bob,250.5\n\
         0x03,Bob,Carol,100.25\n\
         0x04,Carol,Alice,50\n\
         0x05,Alice,Dave,N/A\n",
    );

    let analysis = analyze(&ledger, &AnalysisOptions::new());
    let total: f64 = analysis.wallets.values().map(|w| w.balance).sum();

    assert!(total.abs() < 1e-9, "balances should net to zero, got {}", total);
    assert_eq!(analysis.wallets["Mint"].role, WalletRole::TreasuryMint);
}

#[test]
fn test_analysis_is_idempotent() {
    let ledger = snapshot("from,to,amount\nA,B,3\nB,C,2\nC,A,1\nA,C,7\n");
    let options = AnalysisOptions::new();

    assert_eq!(analyze(&ledger, &options), analyze(&ledger, &options));
}

#[test]
fn test_missing_schema_yields_sentinels() {
    let ledger = snapshot("id,note\n1,hello\n2,world\n3,again\n");
    let schema = resolve_schema(&ledger.columns);

    assert!(build_wallets(&ledger.rows, &schema).is_empty());

    let metrics = aggregate(&ledger.rows, &schema, MissingAmountPolicy::ZeroFill);
    assert_eq!(metrics.transaction_count, 3);
    assert_eq!(metrics.total_volume, None);
    assert_eq!(metrics.average_amount, None);
    assert_eq!(metrics.median_amount, None);
    assert_eq!(metrics.min_amount, None);
    assert_eq!(metrics.max_amount, None);
    assert_eq!(metrics.standard_deviation, None);
}

#[test]
fn test_unparseable_amount_pulls_average_down() {
    let ledger = snapshot("from,to,amount\nA,B,100\nB,C,N/A\n");
    let schema = resolve_schema(&ledger.columns);

    let metrics = aggregate(&ledger.rows, &schema, MissingAmountPolicy::ZeroFill);
    assert_eq!(metrics.total_volume, Some(100.0));
    assert_eq!(metrics.average_amount, Some(50.0));
    assert_eq!(metrics.min_amount, Some(0.0));

    let wallets = build_wallets(&ledger.rows, &schema);
    assert_eq!(wallets["B"].sent, 0.0);
    assert_eq!(wallets["C"].received, 0.0);
}

#[test]
fn test_exclude_policy_skips_missing_amounts() {
    let ledger = snapshot("from,to,amount\nA,B,100\nB,C,N/A\n");
    let schema = resolve_schema(&ledger.columns);

    let metrics = aggregate(&ledger.rows, &schema, MissingAmountPolicy::Exclude);

    assert_eq!(metrics.transaction_count, 2);
    assert_eq!(metrics.average_amount, Some(100.0));
    assert_eq!(metrics.standard_deviation, None);
}

#[test]
fn test_role_precedence() {
    assert_eq!(WalletRole::classify(0.0, 100.0), WalletRole::TreasuryMint);
    assert_eq!(WalletRole::classify(100.0, 100.0), WalletRole::NetSender);
    assert_eq!(WalletRole::classify(50.0, 100.0), WalletRole::NetRecipient);
    assert_eq!(WalletRole::classify(0.0, 0.0), WalletRole::NetSender);
}

#[test]
fn test_ranked_by_balance_descending() {
    let ledger = snapshot("from,to,amount\nMint,A,500\nA,B,200\nA,C,50\n");
    let analysis = analyze(&ledger, &AnalysisOptions::new());

    let order: Vec<&str> = ranked_by_balance(&analysis.wallets)
        .into_iter()
        .map(|(address, _)| address)
        .collect();

    assert_eq!(order, vec!["A", "B", "C", "Mint"]);
}

#[test]
fn test_distribution_only_with_amounts() {
    let with_amounts = snapshot("from,to,amount\nA,B,1\nB,A,2\nA,B,3\n");
    let without_amounts = snapshot("from,to\nA,B\n");

    let options = AnalysisOptions::new().with_histogram_bins(3);
    let distribution = analyze(&with_amounts, &options).distribution.unwrap();

    assert_eq!(distribution.histogram.len(), 3);
    assert_eq!(distribution.histogram.iter().map(|b| b.count).sum::<usize>(), 3);
    assert_eq!(distribution.cumulative_volume, vec![1.0, 3.0, 6.0]);

    assert!(analyze(&without_amounts, &options).distribution.is_none());
}

#[test]
fn test_oversized_bin_request_is_capped() {
    let ledger = snapshot("from,to,amount\nA,B,1\nB,A,2\nA,B,3\n");

    let options = AnalysisOptions::new().with_histogram_bins(usize::MAX);
    let distribution = analyze(&ledger, &options).distribution.unwrap();

    assert_eq!(distribution.histogram.len(), MAX_HISTOGRAM_BINS);
    assert_eq!(distribution.histogram.iter().map(|b| b.count).sum::<usize>(), 3);
}

#[test]
fn test_extreme_amount_range_keeps_finite_bounds() {
    let ledger = snapshot("from,to,amount\nA,B,-1e308\nB,A,1e308\n");

    let distribution = analyze(&ledger, &AnalysisOptions::new()).distribution.unwrap();

    assert!(distribution
        .histogram
        .iter()
        .all(|bin| bin.lower.is_finite() && bin.upper.is_finite()));
}
