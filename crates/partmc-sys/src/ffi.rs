//! Declarations of the engine entry points, resolved at link time against
//! the Fortran library.

use std::ffi::{c_char, c_int, c_void};

#[link(name = "partmc_f")]
unsafe extern "C" {
    // aero_data
    pub fn f_aero_data_ctor(ptr: *mut *mut c_void);
    pub fn f_aero_data_dtor(ptr: *mut *mut c_void);
    pub fn f_aero_data_add_species(
        ptr: *mut c_void,
        name: *const c_char,
        name_size: *const c_int,
        density: *const f64,
        num_ions: *const c_int,
        molec_weight: *const f64,
        kappa: *const f64,
    );
    pub fn f_aero_data_n_spec(ptr: *const c_void, len: *mut c_int);
    pub fn f_aero_data_spec_by_name(
        ptr: *const c_void,
        name: *const c_char,
        name_size: *const c_int,
        idx: *mut c_int,
    );
    pub fn f_aero_data_spec_name_size(ptr: *const c_void, idx: *const c_int, size: *mut c_int);
    pub fn f_aero_data_spec_name(
        ptr: *const c_void,
        idx: *const c_int,
        name: *mut c_char,
        name_size: *const c_int,
    );
    pub fn f_aero_data_get_frac_dim(ptr: *const c_void, val: *mut f64);
    pub fn f_aero_data_set_frac_dim(ptr: *mut c_void, val: *const f64);
    pub fn f_aero_data_get_vol_fill_factor(ptr: *const c_void, val: *mut f64);
    pub fn f_aero_data_set_vol_fill_factor(ptr: *mut c_void, val: *const f64);
    pub fn f_aero_data_get_prime_radius(ptr: *const c_void, val: *mut f64);
    pub fn f_aero_data_set_prime_radius(ptr: *mut c_void, val: *const f64);
    pub fn f_aero_data_densities(ptr: *const c_void, arr: *mut f64, arr_size: *const c_int);
    pub fn f_aero_data_kappa(ptr: *const c_void, arr: *mut f64, arr_size: *const c_int);
    pub fn f_aero_data_molec_weights(ptr: *const c_void, arr: *mut f64, arr_size: *const c_int);
    pub fn f_aero_data_density(ptr: *const c_void, idx: *const c_int, val: *mut f64);
    pub fn f_aero_data_n_source(ptr: *const c_void, len: *mut c_int);
    pub fn f_aero_data_source_by_name(
        ptr: *mut c_void,
        name: *const c_char,
        name_size: *const c_int,
        idx: *mut c_int,
    );
    pub fn f_aero_data_source_name_size(ptr: *const c_void, idx: *const c_int, size: *mut c_int);
    pub fn f_aero_data_source_name(
        ptr: *const c_void,
        idx: *const c_int,
        name: *mut c_char,
        name_size: *const c_int,
    );
    pub fn f_aero_data_rad2vol(ptr: *const c_void, radius: *const f64, vol: *mut f64);
    pub fn f_aero_data_vol2rad(ptr: *const c_void, vol: *const f64, radius: *mut f64);
    pub fn f_aero_data_diam2vol(ptr: *const c_void, diam: *const f64, vol: *mut f64);
    pub fn f_aero_data_vol2diam(ptr: *const c_void, vol: *const f64, diam: *mut f64);

    // gas_data
    pub fn f_gas_data_ctor(ptr: *mut *mut c_void);
    pub fn f_gas_data_dtor(ptr: *mut *mut c_void);
    pub fn f_gas_data_add_species(ptr: *mut c_void, name: *const c_char, name_size: *const c_int);
    pub fn f_gas_data_n_spec(ptr: *const c_void, len: *mut c_int);
    pub fn f_gas_data_spec_by_name(
        ptr: *const c_void,
        name: *const c_char,
        name_size: *const c_int,
        idx: *mut c_int,
    );
    pub fn f_gas_data_spec_name_size(ptr: *const c_void, idx: *const c_int, size: *mut c_int);
    pub fn f_gas_data_spec_name(
        ptr: *const c_void,
        idx: *const c_int,
        name: *mut c_char,
        name_size: *const c_int,
    );

    // aero_mode
    pub fn f_aero_mode_ctor(ptr: *mut *mut c_void);
    pub fn f_aero_mode_dtor(ptr: *mut *mut c_void);
    pub fn f_aero_mode_init(ptr: *mut c_void, aero_data: *const c_void);
    pub fn f_aero_mode_get_n_spec(ptr: *const c_void, len: *mut c_int);
    pub fn f_aero_mode_get_num_conc(ptr: *const c_void, val: *mut f64);
    pub fn f_aero_mode_set_num_conc(ptr: *mut c_void, val: *const f64);
    pub fn f_aero_mode_get_vol_frac(ptr: *const c_void, arr: *mut f64, arr_size: *const c_int);
    pub fn f_aero_mode_set_vol_frac(ptr: *mut c_void, arr: *const f64, arr_size: *const c_int);
    pub fn f_aero_mode_get_vol_frac_std(ptr: *const c_void, arr: *mut f64, arr_size: *const c_int);
    pub fn f_aero_mode_set_vol_frac_std(ptr: *mut c_void, arr: *const f64, arr_size: *const c_int);
    pub fn f_aero_mode_get_char_radius(ptr: *const c_void, val: *mut f64);
    pub fn f_aero_mode_set_char_radius(ptr: *mut c_void, val: *const f64);
    pub fn f_aero_mode_get_gsd(ptr: *const c_void, val: *mut f64);
    pub fn f_aero_mode_set_gsd(ptr: *mut c_void, val: *const f64);
    pub fn f_aero_mode_get_type(ptr: *const c_void, val: *mut c_int);
    pub fn f_aero_mode_set_type(ptr: *mut c_void, val: *const c_int);
    pub fn f_aero_mode_get_name_size(ptr: *const c_void, size: *mut c_int);
    pub fn f_aero_mode_get_name(ptr: *const c_void, name: *mut c_char, name_size: *const c_int);
    pub fn f_aero_mode_set_name(ptr: *mut c_void, name: *const c_char, name_size: *const c_int);
    pub fn f_aero_mode_set_sampled(
        ptr: *mut c_void,
        diam: *const f64,
        num_conc: *const f64,
        n_diam: *const c_int,
    );
    pub fn f_aero_mode_get_sample_n_bin(ptr: *const c_void, n_bin: *mut c_int);
    pub fn f_aero_mode_get_sample_radius(ptr: *const c_void, arr: *mut f64, arr_size: *const c_int);
    pub fn f_aero_mode_get_sample_num_conc(
        ptr: *const c_void,
        arr: *mut f64,
        arr_size: *const c_int,
    );
    pub fn f_aero_mode_num_dist(
        ptr: *const c_void,
        bin_grid: *const c_void,
        aero_data: *const c_void,
        arr: *mut f64,
        arr_size: *const c_int,
    );

    // aero_dist
    pub fn f_aero_dist_ctor(ptr: *mut *mut c_void);
    pub fn f_aero_dist_dtor(ptr: *mut *mut c_void);
    pub fn f_aero_dist_append_mode(ptr: *mut c_void, mode: *const c_void);
    pub fn f_aero_dist_n_mode(ptr: *const c_void, n_mode: *mut c_int);
    pub fn f_aero_dist_total_num_conc(ptr: *const c_void, val: *mut f64);
    pub fn f_aero_dist_mode(ptr: *const c_void, idx: *const c_int, mode: *mut c_void);

    // aero_particle
    pub fn f_aero_particle_ctor(ptr: *mut *mut c_void);
    pub fn f_aero_particle_dtor(ptr: *mut *mut c_void);
    pub fn f_aero_particle_init(
        ptr: *mut c_void,
        aero_data: *const c_void,
        vols: *const f64,
        n_vols: *const c_int,
    );
    pub fn f_aero_particle_n_spec(ptr: *const c_void, len: *mut c_int);
    pub fn f_aero_particle_volumes(ptr: *const c_void, arr: *mut f64, arr_size: *const c_int);
    pub fn f_aero_particle_volume(ptr: *const c_void, val: *mut f64);
    pub fn f_aero_particle_species_volume(ptr: *const c_void, idx: *const c_int, val: *mut f64);
    pub fn f_aero_particle_radius(ptr: *const c_void, val: *mut f64);
    pub fn f_aero_particle_diameter(ptr: *const c_void, val: *mut f64);
    pub fn f_aero_particle_dry_diameter(ptr: *const c_void, val: *mut f64);
    pub fn f_aero_particle_mass(ptr: *const c_void, val: *mut f64);
    pub fn f_aero_particle_species_mass(ptr: *const c_void, idx: *const c_int, val: *mut f64);
    pub fn f_aero_particle_species_masses(ptr: *const c_void, arr: *mut f64, arr_size: *const c_int);
    pub fn f_aero_particle_density(ptr: *const c_void, val: *mut f64);
    pub fn f_aero_particle_id(ptr: *const c_void, id: *mut c_int);
    pub fn f_aero_particle_set_vols(ptr: *mut c_void, vols: *const f64, n_vols: *const c_int);
    pub fn f_aero_particle_zero(ptr: *mut c_void);

    // aero_state
    pub fn f_aero_state_ctor(ptr: *mut *mut c_void);
    pub fn f_aero_state_dtor(ptr: *mut *mut c_void);
    pub fn f_aero_state_init(
        ptr: *mut c_void,
        aero_data: *const c_void,
        n_part: *const f64,
        weight_class: *const c_int,
    );
    pub fn f_aero_state_len(ptr: *const c_void, len: *mut c_int);
    pub fn f_aero_state_total_num_conc(ptr: *const c_void, val: *mut f64);
    pub fn f_aero_state_total_mass_conc(ptr: *const c_void, val: *mut f64);
    pub fn f_aero_state_num_concs(ptr: *const c_void, arr: *mut f64, arr_size: *const c_int);
    pub fn f_aero_state_masses(ptr: *const c_void, arr: *mut f64, arr_size: *const c_int);
    pub fn f_aero_state_diameters(ptr: *const c_void, arr: *mut f64, arr_size: *const c_int);
    pub fn f_aero_state_dry_diameters(ptr: *const c_void, arr: *mut f64, arr_size: *const c_int);
    pub fn f_aero_state_ids(ptr: *const c_void, arr: *mut c_int, arr_size: *const c_int);
    pub fn f_aero_state_particle(ptr: *const c_void, idx: *const c_int, particle: *mut c_void);
    pub fn f_aero_state_add_particle(ptr: *mut c_void, particle: *const c_void);
    pub fn f_aero_state_remove_particle(ptr: *mut c_void, idx: *const c_int);
    pub fn f_aero_state_zero(ptr: *mut c_void);
    pub fn f_aero_state_make_dry(ptr: *mut c_void);
    pub fn f_aero_state_dist_sample(
        ptr: *mut c_void,
        dist: *const c_void,
        sample_prop: *const f64,
        create_time: *const f64,
        allow_doubling: *const c_int,
        allow_halving: *const c_int,
        n_added: *mut c_int,
    );

    // aero_binned
    pub fn f_aero_binned_ctor(ptr: *mut *mut c_void);
    pub fn f_aero_binned_dtor(ptr: *mut *mut c_void);
    pub fn f_aero_binned_init(ptr: *mut c_void, aero_data: *const c_void, bin_grid: *const c_void);
    pub fn f_aero_binned_n_bin(ptr: *const c_void, n_bin: *mut c_int);
    pub fn f_aero_binned_num_conc(ptr: *const c_void, arr: *mut f64, arr_size: *const c_int);
    pub fn f_aero_binned_vol_conc(ptr: *const c_void, arr: *mut f64, arr_size: *const c_int);
    pub fn f_aero_binned_add_aero_dist(
        ptr: *mut c_void,
        bin_grid: *const c_void,
        aero_data: *const c_void,
        dist: *const c_void,
    );

    // bin_grid
    pub fn f_bin_grid_ctor(ptr: *mut *mut c_void);
    pub fn f_bin_grid_dtor(ptr: *mut *mut c_void);
    pub fn f_bin_grid_init(
        ptr: *mut c_void,
        n_bin: *const c_int,
        kind: *const c_int,
        min: *const f64,
        max: *const f64,
    );
    pub fn f_bin_grid_size(ptr: *const c_void, len: *mut c_int);
    pub fn f_bin_grid_edges(ptr: *const c_void, arr: *mut f64, arr_size: *const c_int);
    pub fn f_bin_grid_centers(ptr: *const c_void, arr: *mut f64, arr_size: *const c_int);
    pub fn f_bin_grid_widths(ptr: *const c_void, arr: *mut f64, arr_size: *const c_int);

    // gas_state
    pub fn f_gas_state_ctor(ptr: *mut *mut c_void);
    pub fn f_gas_state_dtor(ptr: *mut *mut c_void);
    pub fn f_gas_state_init(ptr: *mut c_void, gas_data: *const c_void);
    pub fn f_gas_state_len(ptr: *const c_void, len: *mut c_int);
    pub fn f_gas_state_mix_rat(ptr: *const c_void, idx: *const c_int, val: *mut f64);
    pub fn f_gas_state_set_item(ptr: *mut c_void, idx: *const c_int, val: *const f64);
    pub fn f_gas_state_mix_rats(ptr: *const c_void, arr: *mut f64, arr_size: *const c_int);
    pub fn f_gas_state_set_mix_rats(ptr: *mut c_void, arr: *const f64, arr_size: *const c_int);

    // env_state
    pub fn f_env_state_ctor(ptr: *mut *mut c_void);
    pub fn f_env_state_dtor(ptr: *mut *mut c_void);
    pub fn f_env_state_init(
        ptr: *mut c_void,
        rel_humidity: *const f64,
        latitude: *const f64,
        longitude: *const f64,
        altitude: *const f64,
        start_time: *const f64,
        start_day: *const c_int,
    );
    pub fn f_env_state_set_temperature(ptr: *mut c_void, val: *const f64);
    pub fn f_env_state_get_temp(ptr: *const c_void, val: *mut f64);
    pub fn f_env_state_get_rel_humid(ptr: *const c_void, val: *mut f64);
    pub fn f_env_state_get_height(ptr: *const c_void, val: *mut f64);
    pub fn f_env_state_set_height(ptr: *mut c_void, val: *const f64);
    pub fn f_env_state_get_pressure(ptr: *const c_void, val: *mut f64);
    pub fn f_env_state_set_pressure(ptr: *mut c_void, val: *const f64);
    pub fn f_env_state_air_density(ptr: *const c_void, val: *mut f64);
    pub fn f_env_state_get_elapsed_time(ptr: *const c_void, val: *mut f64);
    pub fn f_env_state_get_start_time(ptr: *const c_void, val: *mut f64);
    pub fn f_env_state_get_additive_kernel_coefficient(ptr: *const c_void, val: *mut f64);
    pub fn f_env_state_set_additive_kernel_coefficient(ptr: *mut c_void, val: *const f64);

    // scenario
    pub fn f_scenario_ctor(ptr: *mut *mut c_void);
    pub fn f_scenario_dtor(ptr: *mut *mut c_void);
    pub fn f_scenario_set_temp_profile(
        ptr: *mut c_void,
        times: *const f64,
        vals: *const f64,
        n: *const c_int,
    );
    pub fn f_scenario_set_pressure_profile(
        ptr: *mut c_void,
        times: *const f64,
        vals: *const f64,
        n: *const c_int,
    );
    pub fn f_scenario_set_height_profile(
        ptr: *mut c_void,
        times: *const f64,
        vals: *const f64,
        n: *const c_int,
    );
    pub fn f_scenario_set_aero_emissions(
        ptr: *mut c_void,
        times: *const f64,
        rate_scales: *const f64,
        n: *const c_int,
    );
    pub fn f_scenario_set_aero_dilution(
        ptr: *mut c_void,
        times: *const f64,
        rates: *const f64,
        n: *const c_int,
    );
    pub fn f_scenario_emissions_n_times(ptr: *const c_void, n: *mut c_int);
    pub fn f_scenario_emissions_rate_scale(ptr: *const c_void, arr: *mut f64, arr_size: *const c_int);
    pub fn f_scenario_emissions_time(ptr: *const c_void, arr: *mut f64, arr_size: *const c_int);
    pub fn f_scenario_dilution_n_times(ptr: *const c_void, n: *mut c_int);
    pub fn f_scenario_dilution_rate(ptr: *const c_void, arr: *mut f64, arr_size: *const c_int);
    pub fn f_scenario_dilution_time(ptr: *const c_void, arr: *mut f64, arr_size: *const c_int);
    pub fn f_scenario_init_env_state(ptr: *const c_void, env_state: *mut c_void, time: *const f64);

    // run options
    pub fn f_run_part_opt_ctor(ptr: *mut *mut c_void);
    pub fn f_run_part_opt_dtor(ptr: *mut *mut c_void);
    pub fn f_run_part_opt_init(ptr: *mut c_void, t_max: *const f64, del_t: *const f64);
    pub fn f_run_part_opt_t_max(ptr: *const c_void, val: *mut f64);
    pub fn f_run_part_opt_del_t(ptr: *const c_void, val: *mut f64);
    pub fn f_run_sect_opt_ctor(ptr: *mut *mut c_void);
    pub fn f_run_sect_opt_dtor(ptr: *mut *mut c_void);
    pub fn f_run_sect_opt_init(
        ptr: *mut c_void,
        env_state: *const c_void,
        t_max: *const f64,
        del_t: *const f64,
    );
    pub fn f_run_sect_opt_t_max(ptr: *const c_void, val: *mut f64);
    pub fn f_run_sect_opt_del_t(ptr: *const c_void, val: *mut f64);
    pub fn f_run_exact_opt_ctor(ptr: *mut *mut c_void);
    pub fn f_run_exact_opt_dtor(ptr: *mut *mut c_void);
    pub fn f_run_exact_opt_init(ptr: *mut c_void, env_state: *const c_void, t_max: *const f64);
    pub fn f_run_exact_opt_t_max(ptr: *const c_void, val: *mut f64);

    // opaque subsystem handles
    pub fn f_camp_core_ctor(ptr: *mut *mut c_void);
    pub fn f_camp_core_dtor(ptr: *mut *mut c_void);
    pub fn f_photolysis_ctor(ptr: *mut *mut c_void);
    pub fn f_photolysis_dtor(ptr: *mut *mut c_void);

    // solver drivers
    pub fn f_run_part(
        scenario: *const c_void,
        env_state: *mut c_void,
        aero_data: *const c_void,
        aero_state: *mut c_void,
        gas_data: *const c_void,
        gas_state: *mut c_void,
        opt: *const c_void,
    );
    pub fn f_run_part_timestep(
        scenario: *const c_void,
        env_state: *mut c_void,
        aero_data: *const c_void,
        aero_state: *mut c_void,
        gas_data: *const c_void,
        gas_state: *mut c_void,
        opt: *const c_void,
        i_time: *const c_int,
        t_start: *const f64,
        last_output_time: *mut f64,
        last_progress_print_time: *mut f64,
        i_output: *mut c_int,
    );
    pub fn f_run_part_timeblock(
        scenario: *const c_void,
        env_state: *mut c_void,
        aero_data: *const c_void,
        aero_state: *mut c_void,
        gas_data: *const c_void,
        gas_state: *mut c_void,
        opt: *const c_void,
        i_time: *const c_int,
        i_time_end: *const c_int,
        t_start: *const f64,
        last_output_time: *mut f64,
        last_progress_print_time: *mut f64,
        i_output: *mut c_int,
    );
    pub fn f_run_sect(
        bin_grid: *const c_void,
        gas_data: *const c_void,
        aero_data: *const c_void,
        aero_binned: *mut c_void,
        env_state: *mut c_void,
        gas_state: *mut c_void,
        scenario: *const c_void,
        opt: *const c_void,
    );
    pub fn f_run_exact(
        bin_grid: *const c_void,
        gas_data: *const c_void,
        aero_data: *const c_void,
        aero_binned: *mut c_void,
        env_state: *mut c_void,
        gas_state: *const c_void,
        scenario: *const c_void,
        opt: *const c_void,
    );

    // util
    pub fn f_pow2_above(n: *const c_int, val: *mut c_int);
    pub fn f_sphere_vol2rad(vol: *const f64, radius: *mut f64);
    pub fn f_sphere_rad2vol(radius: *const f64, vol: *mut f64);
    pub fn f_rad2diam(radius: *const f64, diam: *mut f64);
    pub fn f_diam2rad(diam: *const f64, radius: *mut f64);

    // rand
    pub fn f_rand_init(seed: *const c_int);
    pub fn f_rand_normal(mean: *const f64, stddev: *const f64, val: *mut f64);
}
